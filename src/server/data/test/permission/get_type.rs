use super::*;

/// Tests looking up a user's role on a season.
///
/// Expected: Admin for the owner, Moderator for the moderator, None for others
#[tokio::test]
async fn returns_role_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, season) = factory::helpers::create_season_with_admin(db).await?;
    let moderator = factory::create_user(db).await?;
    factory::create_moderator(db, moderator.id, season.id).await?;
    let stranger = factory::create_user(db).await?;

    let repo = PermissionRepository::new(db);
    assert_eq!(
        repo.get_type(admin.id, season.id).await?,
        Some(PermissionType::Admin)
    );
    assert_eq!(
        repo.get_type(moderator.id, season.id).await?,
        Some(PermissionType::Moderator)
    );
    assert_eq!(repo.get_type(stranger.id, season.id).await?, None);

    Ok(())
}

/// Tests that a permission on one season grants nothing on another.
///
/// Expected: None for the other season
#[tokio::test]
async fn is_scoped_to_season() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, _) = factory::helpers::create_season_with_admin(db).await?;
    let other = factory::create_season(db).await?;

    let repo = PermissionRepository::new(db);
    assert_eq!(repo.get_type(admin.id, other.id).await?, None);

    Ok(())
}
