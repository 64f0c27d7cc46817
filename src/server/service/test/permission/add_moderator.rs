use super::*;

/// Tests adding a moderator by username.
///
/// Expected: Ok with a Moderator permission, then Err(PermissionExists) on repeat
#[tokio::test]
async fn adds_moderator_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, season) = factory::helpers::create_season_with_admin(db).await?;
    factory::user::UserFactory::new(db)
        .username("valtteri")
        .build()
        .await?;

    let service = PermissionService::new(db);
    let permission = service.add_moderator(season.id, " valtteri ").await?;

    assert_eq!(permission.username, "valtteri");
    assert_eq!(permission.permission_type, PermissionType::Moderator);

    let result = service.add_moderator(season.id, "valtteri").await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::PermissionExists))
    ));

    Ok(())
}

/// Tests the admin cannot be added again as moderator.
///
/// Expected: Err(PermissionExists)
#[tokio::test]
async fn rejects_admin_as_moderator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, season) = factory::helpers::create_season_with_admin(db).await?;

    let result = PermissionService::new(db)
        .add_moderator(season.id, &admin.username)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::PermissionExists))
    ));

    Ok(())
}

/// Tests adding an unknown username.
///
/// Expected: Err(NotFound("UserNotFound"))
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, season) = factory::helpers::create_season_with_admin(db).await?;

    let result = PermissionService::new(db)
        .add_moderator(season.id, "ghost")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(key)) if key == "UserNotFound"));

    Ok(())
}
