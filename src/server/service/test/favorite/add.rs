use super::*;

/// Tests adding, listing and removing favorites.
///
/// Expected: duplicate add fails with FavoriteExists, second removal with NotFound
#[tokio::test]
async fn manages_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let season = factory::create_season(db).await?;

    let service = FavoriteService::new(db);
    service.add(user.id, season.id).await?;

    let result = service.add(user.id, season.id).await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::FavoriteExists))
    ));

    let seasons = service.get_seasons(user.id).await?;
    assert_eq!(seasons.len(), 1);
    assert_eq!(seasons[0].id, season.id);

    service.remove(user.id, season.id).await?;
    let result = service.remove(user.id, season.id).await;
    assert!(matches!(result, Err(AppError::NotFound(key)) if key == "FavoriteNotFound"));

    Ok(())
}

/// Tests favoriting a season that does not exist.
///
/// Expected: Err(NotFound("SeasonNotFound"))
#[tokio::test]
async fn fails_for_missing_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteService::new(db).add(user.id, 77).await;

    assert!(matches!(result, Err(AppError::NotFound(key)) if key == "SeasonNotFound"));

    Ok(())
}
