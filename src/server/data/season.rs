//! Season repository and the season cascade.
//!
//! Foreign keys are enforced by the database, so the cascade deletes child rows
//! before their parents: results, drivers, teams, races, permissions, favorites,
//! then the season itself.

use chrono::Utc;
use entity::permission::PermissionType;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::model::season::{CreateSeasonParams, Season, UpdateSeasonParams};

pub struct SeasonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active season and grants its owner the Admin permission.
    ///
    /// Both rows are written in one transaction; a failure leaves neither behind.
    ///
    /// # Arguments
    /// - `params` - Validated name and description plus the owning user ID
    ///
    /// # Returns
    /// - `Ok(Season)` - The created season
    /// - `Err(DbErr)` - Database error, e.g. owner does not exist
    pub async fn create(&self, params: CreateSeasonParams) -> Result<Season, DbErr> {
        let txn = self.db.begin().await?;

        let season = entity::season::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            is_archived: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::permission::ActiveModel {
            user_id: ActiveValue::Set(params.owner_id),
            season_id: ActiveValue::Set(season.id),
            permission_type: ActiveValue::Set(PermissionType::Admin),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Season::from_entity(season))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Season>, DbErr> {
        let season = entity::prelude::Season::find_by_id(id).one(self.db).await?;

        Ok(season.map(Season::from_entity))
    }

    /// Gets all seasons, newest first.
    pub async fn get_all(&self) -> Result<Vec<Season>, DbErr> {
        let seasons = entity::prelude::Season::find()
            .order_by_desc(entity::season::Column::CreatedAt)
            .order_by_desc(entity::season::Column::Id)
            .all(self.db)
            .await?;

        Ok(seasons.into_iter().map(Season::from_entity).collect())
    }

    /// Gets the seasons a user holds any permission in, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Season>, DbErr> {
        let seasons = entity::prelude::Season::find()
            .inner_join(entity::prelude::Permission)
            .filter(entity::permission::Column::UserId.eq(user_id))
            .order_by_desc(entity::season::Column::CreatedAt)
            .order_by_desc(entity::season::Column::Id)
            .all(self.db)
            .await?;

        Ok(seasons.into_iter().map(Season::from_entity).collect())
    }

    /// Updates a season's name, description and archive flag.
    pub async fn update(&self, params: UpdateSeasonParams) -> Result<Season, DbErr> {
        let season = entity::prelude::Season::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Season with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::season::ActiveModel = season.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.is_archived = ActiveValue::Set(params.is_archived);

        let season = active_model.update(self.db).await?;

        Ok(Season::from_entity(season))
    }

    pub async fn set_archived(&self, id: i32, is_archived: bool) -> Result<Season, DbErr> {
        let season = entity::prelude::Season::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Season with id {} not found",
                id
            )))?;

        let mut active_model: entity::season::ActiveModel = season.into();
        active_model.is_archived = ActiveValue::Set(is_archived);

        let season = active_model.update(self.db).await?;

        Ok(Season::from_entity(season))
    }

    /// Deletes a season and everything that belongs to it in one transaction.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        delete_season_cascade(&txn, id).await?;

        txn.commit().await?;

        Ok(())
    }
}

/// Deletes a season with all of its rows on the given connection or transaction.
pub(super) async fn delete_season_cascade<C: ConnectionTrait>(
    conn: &C,
    season_id: i32,
) -> Result<(), DbErr> {
    let race_ids: Vec<i32> = entity::prelude::Race::find()
        .select_only()
        .column(entity::race::Column::Id)
        .filter(entity::race::Column::SeasonId.eq(season_id))
        .into_tuple()
        .all(conn)
        .await?;
    let driver_ids: Vec<i32> = entity::prelude::Driver::find()
        .select_only()
        .column(entity::driver::Column::Id)
        .filter(entity::driver::Column::SeasonId.eq(season_id))
        .into_tuple()
        .all(conn)
        .await?;

    entity::prelude::RaceResult::delete_many()
        .filter(
            Condition::any()
                .add(entity::result::Column::RaceId.is_in(race_ids))
                .add(entity::result::Column::DriverId.is_in(driver_ids)),
        )
        .exec(conn)
        .await?;

    entity::prelude::Driver::delete_many()
        .filter(entity::driver::Column::SeasonId.eq(season_id))
        .exec(conn)
        .await?;

    entity::prelude::Team::delete_many()
        .filter(entity::team::Column::SeasonId.eq(season_id))
        .exec(conn)
        .await?;

    entity::prelude::Race::delete_many()
        .filter(entity::race::Column::SeasonId.eq(season_id))
        .exec(conn)
        .await?;

    entity::prelude::Permission::delete_many()
        .filter(entity::permission::Column::SeasonId.eq(season_id))
        .exec(conn)
        .await?;

    entity::prelude::Favorite::delete_many()
        .filter(entity::favorite::Column::SeasonId.eq(season_id))
        .exec(conn)
        .await?;

    entity::prelude::Season::delete_by_id(season_id)
        .exec(conn)
        .await?;

    Ok(())
}
