use super::*;

/// Tests the driver table itself rejects a second driver with the same number in a
/// season, independent of any check done before the insert.
///
/// Expected: Err(UniqueConstraintViolation) in the same season, Ok in another season
#[tokio::test]
async fn rejects_duplicate_number_in_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let other = factory::create_season(db).await?;

    let repo = DriverRepository::new(db);
    repo.create(params(season.id, "Lewis", 44)).await?;

    let err = repo
        .create(params(season.id, "George", 44))
        .await
        .unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    repo.create(params(other.id, "George", 44)).await?;

    Ok(())
}

/// Tests the driver table rejects a duplicate name within a season.
///
/// Expected: Err(UniqueConstraintViolation)
#[tokio::test]
async fn rejects_duplicate_name_in_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;

    let repo = DriverRepository::new(db);
    repo.create(params(season.id, "Lewis", 44)).await?;

    let err = repo
        .create(params(season.id, "Lewis", 45))
        .await
        .unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
