use super::*;

/// Tests results of a race are ordered by position with non-finishers last.
///
/// Expected: P1, P2, then the DNF
#[tokio::test]
async fn orders_finishers_before_non_finishers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let team = factory::create_team(db, season.id).await?;
    let race = factory::create_race(db, season.id).await?;
    let dnf = factory::create_driver(db, season.id).await?;
    let second = factory::create_driver(db, season.id).await?;
    let first = factory::create_driver(db, season.id).await?;

    factory::result::ResultFactory::new(db, dnf.id, team.id, race.id)
        .not_classified(ResultType::Dnf)
        .point(0.0)
        .build()
        .await?;
    factory::result::ResultFactory::new(db, second.id, team.id, race.id)
        .finished(2)
        .point(18.0)
        .build()
        .await?;
    factory::result::ResultFactory::new(db, first.id, team.id, race.id)
        .finished(1)
        .build()
        .await?;

    let repo = ResultRepository::new(db);
    let results = repo.get_by_race(race.id).await?;

    let drivers: Vec<i32> = results.iter().map(|r| r.driver_id).collect();
    assert_eq!(drivers, vec![first.id, second.id, dnf.id]);
    assert_eq!(results[2].result_type, ResultType::Dnf);
    assert_eq!(results[2].position, None);

    Ok(())
}
