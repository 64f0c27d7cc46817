use super::*;

/// Tests deleting a team releases its drivers and drops its results.
///
/// Expected: Ok with the driver kept but teamless, the team's result gone and an
/// unrelated result kept
#[tokio::test]
async fn nulls_drivers_and_deletes_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let (team, driver, race, result) =
        factory::helpers::create_result_with_dependencies(db, season.id).await?;

    let other_team = factory::create_team(db, season.id).await?;
    let other_driver = factory::driver::DriverFactory::new(db, season.id)
        .actual_team_id(Some(other_team.id))
        .build()
        .await?;
    let other_result =
        factory::create_result(db, other_driver.id, other_team.id, race.id).await?;

    let repo = TeamRepository::new(db);
    repo.delete(team.id).await?;

    assert!(repo.get_by_id(team.id).await?.is_none());

    let driver = entity::prelude::Driver::find_by_id(driver.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(driver.actual_team_id, None);

    assert!(entity::prelude::RaceResult::find_by_id(result.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::RaceResult::find_by_id(other_result.id)
        .one(db)
        .await?
        .is_some());

    let other_driver = entity::prelude::Driver::find_by_id(other_driver.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(other_driver.actual_team_id, Some(other_team.id));

    Ok(())
}
