use super::*;

/// Tests promoting keeps exactly one admin.
///
/// Expected: moderator becomes admin, previous admin becomes moderator
#[tokio::test]
async fn swaps_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, season) = factory::helpers::create_season_with_admin(db).await?;
    let moderator = factory::create_user(db).await?;
    let permission = factory::create_moderator(db, moderator.id, season.id).await?;

    let service = PermissionService::new(db);
    service.promote(permission.id).await?;

    assert!(service.is_admin(moderator.id, season.id).await?);
    assert!(!service.is_admin(admin.id, season.id).await?);
    assert!(service.is_admin_moderator(admin.id, season.id).await?);

    let admins = service
        .get_by_season(season.id)
        .await?
        .into_iter()
        .filter(|p| p.is_admin())
        .count();
    assert_eq!(admins, 1);

    Ok(())
}

/// Tests promoting the current admin.
///
/// Expected: Err(AlreadyAdmin)
#[tokio::test]
async fn rejects_promoting_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let season = factory::create_season(db).await?;
    let permission = factory::create_admin(db, user.id, season.id).await?;

    let result = PermissionService::new(db).promote(permission.id).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::AlreadyAdmin))
    ));

    Ok(())
}
