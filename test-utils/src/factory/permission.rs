//! Permission factory for granting users a role in a season.

use entity::permission::PermissionType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a permission row of the given type.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - User receiving the permission
/// - `season_id` - Season the permission is scoped to
/// - `permission_type` - Admin or Moderator
///
/// # Returns
/// - `Ok(entity::permission::Model)` - Created permission
/// - `Err(DbErr)` - Database error during insert
pub async fn create_permission(
    db: &DatabaseConnection,
    user_id: i32,
    season_id: i32,
    permission_type: PermissionType,
) -> Result<entity::permission::Model, DbErr> {
    entity::permission::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        season_id: ActiveValue::Set(season_id),
        permission_type: ActiveValue::Set(permission_type),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Grants the user the Admin permission for the season.
pub async fn create_admin(
    db: &DatabaseConnection,
    user_id: i32,
    season_id: i32,
) -> Result<entity::permission::Model, DbErr> {
    create_permission(db, user_id, season_id, PermissionType::Admin).await
}

/// Grants the user the Moderator permission for the season.
pub async fn create_moderator(
    db: &DatabaseConnection,
    user_id: i32,
    season_id: i32,
) -> Result<entity::permission::Model, DbErr> {
    create_permission(db, user_id, season_id, PermissionType::Moderator).await
}
