//! Driver repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::driver::{CreateDriverParams, Driver, UpdateDriverParams};

pub struct DriverRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDriverParams) -> Result<Driver, DbErr> {
        let driver = entity::driver::ActiveModel {
            season_id: ActiveValue::Set(params.season_id),
            actual_team_id: ActiveValue::Set(params.actual_team_id),
            name: ActiveValue::Set(params.name),
            number: ActiveValue::Set(params.number),
            nationality: ActiveValue::Set(params.nationality),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Driver::from_entity(driver))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Driver>, DbErr> {
        let driver = entity::prelude::Driver::find_by_id(id).one(self.db).await?;

        Ok(driver.map(Driver::from_entity))
    }

    /// Gets all drivers of a season ordered by car number.
    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Driver>, DbErr> {
        let drivers = entity::prelude::Driver::find()
            .filter(entity::driver::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::driver::Column::Number)
            .all(self.db)
            .await?;

        Ok(drivers.into_iter().map(Driver::from_entity).collect())
    }

    /// Gets every driver with the given name across all seasons, oldest season first.
    pub async fn get_by_name(&self, name: &str) -> Result<Vec<Driver>, DbErr> {
        let drivers = entity::prelude::Driver::find()
            .filter(entity::driver::Column::Name.eq(name))
            .order_by_asc(entity::driver::Column::SeasonId)
            .order_by_asc(entity::driver::Column::Id)
            .all(self.db)
            .await?;

        Ok(drivers.into_iter().map(Driver::from_entity).collect())
    }

    pub async fn name_exists(
        &self,
        season_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Driver::find()
            .filter(entity::driver::Column::SeasonId.eq(season_id))
            .filter(entity::driver::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::driver::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn number_exists(
        &self,
        season_id: i32,
        number: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Driver::find()
            .filter(entity::driver::Column::SeasonId.eq(season_id))
            .filter(entity::driver::Column::Number.eq(number));
        if let Some(id) = exclude_id {
            query = query.filter(entity::driver::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn update(&self, params: UpdateDriverParams) -> Result<Driver, DbErr> {
        let driver = entity::prelude::Driver::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Driver with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::driver::ActiveModel = driver.into();
        active_model.actual_team_id = ActiveValue::Set(params.actual_team_id);
        active_model.name = ActiveValue::Set(params.name);
        active_model.number = ActiveValue::Set(params.number);
        active_model.nationality = ActiveValue::Set(params.nationality);

        let driver = active_model.update(self.db).await?;

        Ok(Driver::from_entity(driver))
    }

    /// Deletes a driver and all of their results in one transaction.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::RaceResult::delete_many()
            .filter(entity::result::Column::DriverId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Driver::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}
