//! Race result repository.
//!
//! Results have no season column of their own; a result's season is the season
//! of its race.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::result::{RaceResult, ResultFields};

pub struct ResultRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResultRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a result whose fields are already normalized.
    pub async fn create(&self, fields: ResultFields) -> Result<RaceResult, DbErr> {
        let result = entity::result::ActiveModel {
            driver_id: ActiveValue::Set(fields.driver_id),
            team_id: ActiveValue::Set(fields.team_id),
            race_id: ActiveValue::Set(fields.race_id),
            result_type: ActiveValue::Set(fields.result_type),
            position: ActiveValue::Set(fields.position),
            point: ActiveValue::Set(fields.point),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RaceResult::from_entity(result))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<RaceResult>, DbErr> {
        let result = entity::prelude::RaceResult::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(result.map(RaceResult::from_entity))
    }

    /// Gets a race's results, classified finishers first by position.
    pub async fn get_by_race(&self, race_id: i32) -> Result<Vec<RaceResult>, DbErr> {
        let results = entity::prelude::RaceResult::find()
            .filter(entity::result::Column::RaceId.eq(race_id))
            .all(self.db)
            .await?;

        Ok(sorted(results))
    }

    /// Gets every result of every race in a season.
    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<RaceResult>, DbErr> {
        let results = entity::prelude::RaceResult::find()
            .inner_join(entity::prelude::Race)
            .filter(entity::race::Column::SeasonId.eq(season_id))
            .all(self.db)
            .await?;

        Ok(sorted(results))
    }

    /// Checks whether a driver already has a result in a race, optionally ignoring one result.
    pub async fn exists_for_driver_in_race(
        &self,
        driver_id: i32,
        race_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::RaceResult::find()
            .filter(entity::result::Column::DriverId.eq(driver_id))
            .filter(entity::result::Column::RaceId.eq(race_id));
        if let Some(id) = exclude_id {
            query = query.filter(entity::result::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn update(&self, id: i32, fields: ResultFields) -> Result<RaceResult, DbErr> {
        let result = entity::prelude::RaceResult::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Result with id {} not found",
                id
            )))?;

        let mut active_model: entity::result::ActiveModel = result.into();
        active_model.driver_id = ActiveValue::Set(fields.driver_id);
        active_model.team_id = ActiveValue::Set(fields.team_id);
        active_model.race_id = ActiveValue::Set(fields.race_id);
        active_model.result_type = ActiveValue::Set(fields.result_type);
        active_model.position = ActiveValue::Set(fields.position);
        active_model.point = ActiveValue::Set(fields.point);

        let result = active_model.update(self.db).await?;

        Ok(RaceResult::from_entity(result))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RaceResult::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

fn sorted(results: Vec<entity::result::Model>) -> Vec<RaceResult> {
    let mut results: Vec<RaceResult> = results.into_iter().map(RaceResult::from_entity).collect();
    results.sort_by_key(|r| (r.race_id, r.position.is_none(), r.position, r.id));
    results
}
