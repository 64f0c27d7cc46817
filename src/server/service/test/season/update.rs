use super::*;

/// Tests updating an archived season is rejected.
///
/// Expected: Err(SeasonArchived) and the season unchanged
#[tokio::test]
async fn rejects_update_of_archived_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::season::create_archived_season(db).await?;

    let service = SeasonService::new(db);
    let result = service
        .update(UpdateSeasonParams {
            id: season.id,
            name: "Renamed".to_string(),
            description: String::new(),
            is_archived: false,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::SeasonArchived))
    ));
    assert_eq!(service.get_existing(season.id).await?.name, season.name);

    Ok(())
}

/// Tests updating a season that does not exist.
///
/// Expected: Err(NotFound("SeasonNotFound"))
#[tokio::test]
async fn fails_for_missing_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SeasonService::new(db)
        .update(UpdateSeasonParams {
            id: 404,
            name: "Ghost".to_string(),
            description: String::new(),
            is_archived: false,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(key)) if key == "SeasonNotFound"));

    Ok(())
}
