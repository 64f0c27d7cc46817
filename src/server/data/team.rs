//! Team repository.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::team::{CreateTeamParams, Team, UpdateTeamParams};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let team = entity::team::ActiveModel {
            season_id: ActiveValue::Set(params.season_id),
            name: ActiveValue::Set(params.name),
            color: ActiveValue::Set(params.color),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(team))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let team = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(team.map(Team::from_entity))
    }

    /// Gets all teams of a season ordered by name.
    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Team>, DbErr> {
        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(Team::from_entity).collect())
    }

    /// Checks whether a team name is taken within a season, optionally ignoring one team.
    pub async fn name_exists(
        &self,
        season_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Team::find()
            .filter(entity::team::Column::SeasonId.eq(season_id))
            .filter(entity::team::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::team::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Team with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::team::ActiveModel = team.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.color = ActiveValue::Set(params.color);

        let team = active_model.update(self.db).await?;

        Ok(Team::from_entity(team))
    }

    /// Deletes a team.
    ///
    /// Drivers currently racing for the team are left without a team and every
    /// result scored for the team is deleted, in one transaction.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Driver::update_many()
            .col_expr(
                entity::driver::Column::ActualTeamId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::driver::Column::ActualTeamId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::RaceResult::delete_many()
            .filter(entity::result::Column::TeamId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Team::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}
