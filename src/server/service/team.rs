use sea_orm::DatabaseConnection;

use crate::server::{
    data::team::TeamRepository,
    error::{validation::ValidationError, AppError},
    model::team::{CreateTeamParams, Team, UpdateTeamParams},
    util::normalize,
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team with a normalized name and color.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::ValidationErr)` - `NameRequired`, `InvalidColor` or `TeamNameExists`
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        let name = normalize::name(&params.name)?;
        let color = normalize::color(&params.color)?;

        if repo.name_exists(params.season_id, &name, None).await? {
            return Err(ValidationError::TeamNameExists.into());
        }

        let team = repo
            .create(CreateTeamParams {
                season_id: params.season_id,
                name,
                color,
            })
            .await
            .map_err(|err| AppError::unique_violation(err, |_| ValidationError::TeamNameExists))?;

        Ok(team)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_existing(&self, id: i32) -> Result<Team, AppError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("TeamNotFound"))
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        Ok(repo.get_by_season(season_id).await?)
    }

    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        let existing = self.get_existing(params.id).await?;
        let name = normalize::name(&params.name)?;
        let color = normalize::color(&params.color)?;

        if repo
            .name_exists(existing.season_id, &name, Some(existing.id))
            .await?
        {
            return Err(ValidationError::TeamNameExists.into());
        }

        let team = repo
            .update(UpdateTeamParams {
                id: existing.id,
                name,
                color,
            })
            .await
            .map_err(|err| AppError::unique_violation(err, |_| ValidationError::TeamNameExists))?;

        Ok(team)
    }

    /// Deletes a team, detaching its drivers and dropping its results.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);

        self.get_existing(id).await?;
        repo.delete(id).await?;

        Ok(())
    }
}
