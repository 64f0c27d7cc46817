//! Favorite season repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{favorite::Favorite, season::Season};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, season_id: i32) -> Result<Favorite, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            season_id: ActiveValue::Set(season_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(favorite))
    }

    pub async fn exists(&self, user_id: i32, season_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::SeasonId.eq(season_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the seasons a user marked as favorite, newest first.
    pub async fn get_seasons_by_user(&self, user_id: i32) -> Result<Vec<Season>, DbErr> {
        let seasons = entity::prelude::Season::find()
            .inner_join(entity::prelude::Favorite)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::season::Column::CreatedAt)
            .order_by_desc(entity::season::Column::Id)
            .all(self.db)
            .await?;

        Ok(seasons.into_iter().map(Season::from_entity).collect())
    }

    /// Removes a favorite.
    ///
    /// # Returns
    /// - `Ok(true)` - A favorite was removed
    /// - `Ok(false)` - The user had not marked the season as favorite
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, user_id: i32, season_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::SeasonId.eq(season_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
