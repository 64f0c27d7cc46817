use super::*;

/// Tests deleting a driver removes their results.
///
/// Expected: Ok with the driver and result gone, team and race kept
#[tokio::test]
async fn deletes_driver_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let (team, driver, race, _) =
        factory::helpers::create_result_with_dependencies(db, season.id).await?;

    let repo = DriverRepository::new(db);
    repo.delete(driver.id).await?;

    assert!(repo.get_by_id(driver.id).await?.is_none());
    assert_eq!(entity::prelude::RaceResult::find().count(db).await?, 0);
    assert!(entity::prelude::Team::find_by_id(team.id).one(db).await?.is_some());
    assert!(entity::prelude::Race::find_by_id(race.id).one(db).await?.is_some());

    Ok(())
}
