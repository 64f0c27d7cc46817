use sea_orm::DatabaseConnection;

use crate::server::{
    data::{driver::DriverRepository, team::TeamRepository},
    error::{validation::ValidationError, AppError},
    model::driver::{CreateDriverParams, Driver, UpdateDriverParams},
    util::normalize,
};

/// Normalized driver fields ready to be written.
struct ValidDriver {
    name: String,
    number: i32,
    nationality: Option<String>,
    actual_team_id: Option<i32>,
}

pub struct DriverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a driver in a season.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The created driver
    /// - `Err(AppError::NotFound)` - The given team does not exist
    /// - `Err(AppError::ValidationErr)` - `NameRequired`, `InvalidDriverNumber`,
    ///   `InvalidNationality`, `TeamNotInSeason`, `DriverNameExists` or
    ///   `DriverNumberExists`
    pub async fn create(&self, params: CreateDriverParams) -> Result<Driver, AppError> {
        let repo = DriverRepository::new(self.db);

        let valid = self
            .validate(
                params.season_id,
                None,
                &params.name,
                params.number,
                params.nationality,
                params.actual_team_id,
            )
            .await?;

        let driver = repo
            .create(CreateDriverParams {
                season_id: params.season_id,
                actual_team_id: valid.actual_team_id,
                name: valid.name,
                number: valid.number,
                nationality: valid.nationality,
            })
            .await
            .map_err(|err| AppError::unique_violation(err, driver_conflict))?;

        Ok(driver)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Driver>, AppError> {
        let repo = DriverRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_existing(&self, id: i32) -> Result<Driver, AppError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("DriverNotFound"))
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Driver>, AppError> {
        let repo = DriverRepository::new(self.db);

        Ok(repo.get_by_season(season_id).await?)
    }

    pub async fn update(&self, params: UpdateDriverParams) -> Result<Driver, AppError> {
        let repo = DriverRepository::new(self.db);

        let existing = self.get_existing(params.id).await?;
        let valid = self
            .validate(
                existing.season_id,
                Some(existing.id),
                &params.name,
                params.number,
                params.nationality,
                params.actual_team_id,
            )
            .await?;

        let driver = repo
            .update(UpdateDriverParams {
                id: existing.id,
                actual_team_id: valid.actual_team_id,
                name: valid.name,
                number: valid.number,
                nationality: valid.nationality,
            })
            .await
            .map_err(|err| AppError::unique_violation(err, driver_conflict))?;

        Ok(driver)
    }

    /// Deletes a driver and their results.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DriverRepository::new(self.db);

        self.get_existing(id).await?;
        repo.delete(id).await?;

        Ok(())
    }

    async fn validate(
        &self,
        season_id: i32,
        exclude_id: Option<i32>,
        name: &str,
        number: i32,
        nationality: Option<String>,
        actual_team_id: Option<i32>,
    ) -> Result<ValidDriver, AppError> {
        let repo = DriverRepository::new(self.db);

        let name = normalize::name(name)?;
        let number = normalize::driver_number(number)?;
        let nationality = normalize::nationality(nationality)?;

        if let Some(team_id) = actual_team_id {
            let team = TeamRepository::new(self.db)
                .get_by_id(team_id)
                .await?
                .ok_or_else(|| AppError::not_found("TeamNotFound"))?;

            if team.season_id != season_id {
                return Err(ValidationError::TeamNotInSeason.into());
            }
        }

        if repo.name_exists(season_id, &name, exclude_id).await? {
            return Err(ValidationError::DriverNameExists.into());
        }
        if repo.number_exists(season_id, number, exclude_id).await? {
            return Err(ValidationError::DriverNumberExists.into());
        }

        Ok(ValidDriver {
            name,
            number,
            nationality,
            actual_team_id,
        })
    }
}

/// Drivers are unique per season by name and by number.
pub(crate) fn driver_conflict(message: &str) -> ValidationError {
    if message.contains("number") {
        ValidationError::DriverNumberExists
    } else {
        ValidationError::DriverNameExists
    }
}
