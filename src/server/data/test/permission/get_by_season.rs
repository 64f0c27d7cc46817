use super::*;

/// Tests listing a season's permissions with usernames resolved.
///
/// Expected: Ok with the admin first even though the moderator was granted earlier
#[tokio::test]
async fn lists_admin_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::create_season(db).await?;
    let moderator = factory::user::UserFactory::new(db)
        .username("moderator")
        .build()
        .await?;
    let admin = factory::user::UserFactory::new(db)
        .username("admin")
        .build()
        .await?;
    factory::create_moderator(db, moderator.id, season.id).await?;
    factory::create_admin(db, admin.id, season.id).await?;

    let repo = PermissionRepository::new(db);
    let permissions = repo.get_by_season(season.id).await?;

    assert_eq!(permissions.len(), 2);
    assert_eq!(permissions[0].username, "admin");
    assert_eq!(permissions[0].permission_type, PermissionType::Admin);
    assert_eq!(permissions[1].username, "moderator");
    assert_eq!(permissions[1].permission_type, PermissionType::Moderator);

    Ok(())
}
