//! Race result validation and persistence.
//!
//! A result ties a driver, a team and a race together; all three must belong to
//! the season the request targets.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        driver::DriverRepository, race::RaceRepository, result::ResultRepository,
        team::TeamRepository,
    },
    error::{validation::ValidationError, AppError},
    model::result::{CreateResultParams, RaceResult, ResultFields, UpdateResultParams},
    util::normalize,
};

pub struct ResultService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResultService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a result in a season.
    ///
    /// # Returns
    /// - `Ok(RaceResult)` - The created result
    /// - `Err(AppError::NotFound)` - Driver, team or race does not exist
    /// - `Err(AppError::ValidationErr)` - `SeasonMismatch`, `InvalidPosition`,
    ///   `InvalidPoint` or `ResultExists`
    pub async fn create(&self, params: CreateResultParams) -> Result<RaceResult, AppError> {
        let repo = ResultRepository::new(self.db);

        let fields = self.validate(params.season_id, None, params.fields).await?;

        repo.create(fields)
            .await
            .map_err(|err| AppError::unique_violation(err, |_| ValidationError::ResultExists))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<RaceResult>, AppError> {
        let repo = ResultRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_existing(&self, id: i32) -> Result<RaceResult, AppError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("ResultNotFound"))
    }

    /// Gets the season a result belongs to through its race.
    pub async fn get_season_id(&self, result: &RaceResult) -> Result<i32, AppError> {
        let race = RaceRepository::new(self.db)
            .get_by_id(result.race_id)
            .await?
            .ok_or_else(|| AppError::not_found("RaceNotFound"))?;

        Ok(race.season_id)
    }

    pub async fn get_by_race(&self, race_id: i32) -> Result<Vec<RaceResult>, AppError> {
        let repo = ResultRepository::new(self.db);

        if RaceRepository::new(self.db)
            .get_by_id(race_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("RaceNotFound"));
        }

        Ok(repo.get_by_race(race_id).await?)
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<RaceResult>, AppError> {
        let repo = ResultRepository::new(self.db);

        Ok(repo.get_by_season(season_id).await?)
    }

    /// Replaces every field of a result; the result stays in its current season.
    pub async fn update(&self, params: UpdateResultParams) -> Result<RaceResult, AppError> {
        let repo = ResultRepository::new(self.db);

        let existing = self.get_existing(params.id).await?;
        let season_id = self.get_season_id(&existing).await?;
        let fields = self
            .validate(season_id, Some(existing.id), params.fields)
            .await?;

        repo.update(existing.id, fields)
            .await
            .map_err(|err| AppError::unique_violation(err, |_| ValidationError::ResultExists))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ResultRepository::new(self.db);

        self.get_existing(id).await?;
        repo.delete(id).await?;

        Ok(())
    }

    async fn validate(
        &self,
        season_id: i32,
        exclude_id: Option<i32>,
        fields: ResultFields,
    ) -> Result<ResultFields, AppError> {
        let driver = DriverRepository::new(self.db)
            .get_by_id(fields.driver_id)
            .await?
            .ok_or_else(|| AppError::not_found("DriverNotFound"))?;
        let team = TeamRepository::new(self.db)
            .get_by_id(fields.team_id)
            .await?
            .ok_or_else(|| AppError::not_found("TeamNotFound"))?;
        let race = RaceRepository::new(self.db)
            .get_by_id(fields.race_id)
            .await?
            .ok_or_else(|| AppError::not_found("RaceNotFound"))?;

        if driver.season_id != season_id || team.season_id != season_id || race.season_id != season_id
        {
            return Err(ValidationError::SeasonMismatch.into());
        }

        let position = normalize::position(fields.result_type, fields.position)?;
        let point = normalize::point(fields.point)?;

        if ResultRepository::new(self.db)
            .exists_for_driver_in_race(driver.id, race.id, exclude_id)
            .await?
        {
            return Err(ValidationError::ResultExists.into());
        }

        Ok(ResultFields {
            position,
            point,
            ..fields
        })
    }
}
