use super::*;

/// Tests driver number and name uniqueness are scoped to the season.
///
/// Expected: true in the same season, false elsewhere or when excluding the owner
#[tokio::test]
async fn checks_number_and_name_within_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let other = factory::create_season(db).await?;
    let driver = factory::driver::DriverFactory::new(db, season.id)
        .name("Ayrton")
        .number(12)
        .build()
        .await?;

    let repo = DriverRepository::new(db);
    assert!(repo.number_exists(season.id, 12, None).await?);
    assert!(!repo.number_exists(other.id, 12, None).await?);
    assert!(!repo.number_exists(season.id, 12, Some(driver.id)).await?);

    assert!(repo.name_exists(season.id, "Ayrton", None).await?);
    assert!(!repo.name_exists(other.id, "Ayrton", None).await?);
    assert!(!repo.name_exists(season.id, "Ayrton", Some(driver.id)).await?);

    Ok(())
}
