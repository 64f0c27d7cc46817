use super::*;

/// Tests creating a team normalizes name and color.
///
/// Expected: Ok with trimmed name and `#RRGGBB` color
#[tokio::test]
async fn normalizes_name_and_color() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;

    let team = TeamService::new(db)
        .create(CreateTeamParams {
            season_id: season.id,
            name: " McLaren ".to_string(),
            color: "f80".to_string(),
        })
        .await?;

    assert_eq!(team.name, "McLaren");
    assert_eq!(team.color, "#FF8800");

    Ok(())
}

/// Tests duplicate names and invalid colors.
///
/// Expected: Err(TeamNameExists) and Err(InvalidColor)
#[tokio::test]
async fn rejects_duplicate_name_and_bad_color() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    factory::team::TeamFactory::new(db, season.id)
        .name("Williams")
        .build()
        .await?;

    let service = TeamService::new(db);

    let result = service
        .create(CreateTeamParams {
            season_id: season.id,
            name: "Williams ".to_string(),
            color: "#005AFF".to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::TeamNameExists))
    ));

    let result = service
        .create(CreateTeamParams {
            season_id: season.id,
            name: "Haas".to_string(),
            color: "blue".to_string(),
        })
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidColor))
    ));

    Ok(())
}
