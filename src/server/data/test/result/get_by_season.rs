use super::*;

/// Tests season results span all races of the season and nothing else.
///
/// Expected: Ok with the two results of the season, not the other season's result
#[tokio::test]
async fn returns_results_of_season_races() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let other = factory::create_season(db).await?;
    let (team, driver, _, first) =
        factory::helpers::create_result_with_dependencies(db, season.id).await?;
    let race = factory::create_race(db, season.id).await?;
    let second = factory::create_result(db, driver.id, team.id, race.id).await?;
    factory::helpers::create_result_with_dependencies(db, other.id).await?;

    let repo = ResultRepository::new(db);
    let results = repo.get_by_season(season.id).await?;

    let ids: Vec<i32> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    Ok(())
}
