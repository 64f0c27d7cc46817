use super::*;

/// Tests creating a season makes the creator its admin.
///
/// Expected: Ok with trimmed name and the creator passing the admin check
#[tokio::test]
async fn creator_becomes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let season = SeasonService::new(db)
        .create(CreateSeasonParams {
            owner_id: owner.id,
            name: "  Winter Series ".to_string(),
            description: String::new(),
        })
        .await?;

    assert_eq!(season.name, "Winter Series");
    assert!(!season.is_archived);

    let permissions = PermissionService::new(db);
    assert!(permissions.is_admin(owner.id, season.id).await?);
    assert!(permissions.is_admin_moderator(owner.id, season.id).await?);

    Ok(())
}

/// Tests creating a season with a blank name.
///
/// Expected: Err(NameRequired)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let result = SeasonService::new(db)
        .create(CreateSeasonParams {
            owner_id: owner.id,
            name: "   ".to_string(),
            description: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NameRequired))
    ));

    Ok(())
}
