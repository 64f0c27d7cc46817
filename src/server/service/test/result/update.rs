use super::*;

/// Tests updating a result in place does not trip the duplicate check.
///
/// Expected: Ok with the new position and points
#[tokio::test]
async fn updates_own_result() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let (team, driver, race, existing) =
        factory::helpers::create_result_with_dependencies(db, season.id).await?;

    let service = ResultService::new(db);
    let updated = service
        .update(UpdateResultParams {
            id: existing.id,
            fields: ResultFields {
                position: Some(3),
                point: 15.0,
                ..fields(driver.id, team.id, race.id)
            },
        })
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.position, Some(3));
    assert_eq!(updated.point, 15.0);
    assert_eq!(service.get_season_id(&updated).await?, season.id);

    Ok(())
}
