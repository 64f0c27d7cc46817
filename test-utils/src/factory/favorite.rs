//! Favorite factory for bookmarking seasons in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks the season as a favorite of the user.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    season_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        season_id: ActiveValue::Set(season_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
