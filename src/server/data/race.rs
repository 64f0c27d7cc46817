//! Race repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::server::model::race::{CreateRaceParams, Race, UpdateRaceParams};

pub struct RaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRaceParams) -> Result<Race, DbErr> {
        let race = entity::race::ActiveModel {
            season_id: ActiveValue::Set(params.season_id),
            name: ActiveValue::Set(params.name),
            date: ActiveValue::Set(params.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Race::from_entity(race))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Race>, DbErr> {
        let race = entity::prelude::Race::find_by_id(id).one(self.db).await?;

        Ok(race.map(Race::from_entity))
    }

    /// Gets all races of a season in calendar order, undated races last.
    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Race>, DbErr> {
        let races = entity::prelude::Race::find()
            .filter(entity::race::Column::SeasonId.eq(season_id))
            .all(self.db)
            .await?;

        let mut races: Vec<Race> = races.into_iter().map(Race::from_entity).collect();
        races.sort_by(Race::calendar_cmp);

        Ok(races)
    }

    pub async fn name_exists(
        &self,
        season_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Race::find()
            .filter(entity::race::Column::SeasonId.eq(season_id))
            .filter(entity::race::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::race::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn update(&self, params: UpdateRaceParams) -> Result<Race, DbErr> {
        let race = entity::prelude::Race::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Race with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::race::ActiveModel = race.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.date = ActiveValue::Set(params.date);

        let race = active_model.update(self.db).await?;

        Ok(Race::from_entity(race))
    }

    /// Deletes a race and all of its results in one transaction.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::RaceResult::delete_many()
            .filter(entity::result::Column::RaceId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Race::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}
