use super::*;

/// Tests deleting a race removes its results only.
///
/// Expected: Ok with the race's results gone and the other race's result kept
#[tokio::test]
async fn deletes_race_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let (team, driver, race, _) =
        factory::helpers::create_result_with_dependencies(db, season.id).await?;
    let other_race = factory::create_race(db, season.id).await?;
    factory::create_result(db, driver.id, team.id, other_race.id).await?;

    let repo = RaceRepository::new(db);
    repo.delete(race.id).await?;

    assert!(repo.get_by_id(race.id).await?.is_none());
    assert_eq!(entity::prelude::RaceResult::find().count(db).await?, 1);
    assert!(entity::prelude::Driver::find_by_id(driver.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
