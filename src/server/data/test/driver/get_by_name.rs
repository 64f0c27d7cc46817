use super::*;

/// Tests finding a driver name across seasons.
///
/// Expected: Ok with one driver per season holding the name, none with other names
#[tokio::test]
async fn finds_drivers_across_seasons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_season(db).await?;
    let second = factory::create_season(db).await?;
    factory::driver::DriverFactory::new(db, first.id)
        .name("Alain")
        .build()
        .await?;
    factory::driver::DriverFactory::new(db, second.id)
        .name("Alain")
        .build()
        .await?;
    factory::create_driver(db, first.id).await?;

    let repo = DriverRepository::new(db);
    let drivers = repo.get_by_name("Alain").await?;

    assert_eq!(drivers.len(), 2);
    assert_eq!(drivers[0].season_id, first.id);
    assert_eq!(drivers[1].season_id, second.id);

    Ok(())
}
