use sea_orm::DatabaseConnection;

use crate::server::{
    data::race::RaceRepository,
    error::{validation::ValidationError, AppError},
    model::race::{CreateRaceParams, Race, UpdateRaceParams},
    util::normalize,
};

pub struct RaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRaceParams) -> Result<Race, AppError> {
        let repo = RaceRepository::new(self.db);

        let name = normalize::name(&params.name)?;
        if repo.name_exists(params.season_id, &name, None).await? {
            return Err(ValidationError::RaceNameExists.into());
        }

        let race = repo
            .create(CreateRaceParams {
                season_id: params.season_id,
                name,
                date: params.date,
            })
            .await
            .map_err(|err| AppError::unique_violation(err, |_| ValidationError::RaceNameExists))?;

        Ok(race)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Race>, AppError> {
        let repo = RaceRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_existing(&self, id: i32) -> Result<Race, AppError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("RaceNotFound"))
    }

    /// Gets a season's races in calendar order.
    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Race>, AppError> {
        let repo = RaceRepository::new(self.db);

        Ok(repo.get_by_season(season_id).await?)
    }

    pub async fn update(&self, params: UpdateRaceParams) -> Result<Race, AppError> {
        let repo = RaceRepository::new(self.db);

        let existing = self.get_existing(params.id).await?;
        let name = normalize::name(&params.name)?;

        if repo
            .name_exists(existing.season_id, &name, Some(existing.id))
            .await?
        {
            return Err(ValidationError::RaceNameExists.into());
        }

        let race = repo
            .update(UpdateRaceParams {
                id: existing.id,
                name,
                date: params.date,
            })
            .await
            .map_err(|err| AppError::unique_violation(err, |_| ValidationError::RaceNameExists))?;

        Ok(race)
    }

    /// Deletes a race and its results.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = RaceRepository::new(self.db);

        self.get_existing(id).await?;
        repo.delete(id).await?;

        Ok(())
    }
}
