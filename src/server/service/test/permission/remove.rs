use super::*;

/// Tests removing permissions.
///
/// Expected: moderator removed, admin rejected with AdminCannotBeRemoved
#[tokio::test]
async fn removes_only_moderators() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let season = factory::create_season(db).await?;
    let admin_permission = factory::create_admin(db, user.id, season.id).await?;
    let moderator = factory::create_user(db).await?;
    let moderator_permission = factory::create_moderator(db, moderator.id, season.id).await?;

    let service = PermissionService::new(db);

    service.remove(moderator_permission.id).await?;
    assert!(!service.is_admin_moderator(moderator.id, season.id).await?);

    let result = service.remove(admin_permission.id).await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::AdminCannotBeRemoved))
    ));
    assert!(service.is_admin(user.id, season.id).await?);

    Ok(())
}
