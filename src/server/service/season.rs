use sea_orm::DatabaseConnection;

use crate::server::{
    data::season::SeasonRepository,
    error::AppError,
    model::season::{CreateSeasonParams, Season, UpdateSeasonParams},
    util::normalize,
};

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active season owned by `params.owner_id`, who becomes its Admin.
    ///
    /// # Returns
    /// - `Ok(Season)` - The created season
    /// - `Err(AppError::ValidationErr(NameRequired))` - Blank name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateSeasonParams) -> Result<Season, AppError> {
        let repo = SeasonRepository::new(self.db);

        let owner_id = params.owner_id;
        let season = repo
            .create(CreateSeasonParams {
                owner_id,
                name: normalize::name(&params.name)?,
                description: params.description.trim().to_string(),
            })
            .await?;

        tracing::info!(
            "User {} created season {} ({})",
            owner_id,
            season.id,
            season.name
        );

        Ok(season)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Season>, AppError> {
        let repo = SeasonRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets a season or fails with `SeasonNotFound`.
    pub async fn get_existing(&self, id: i32) -> Result<Season, AppError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("SeasonNotFound"))
    }

    pub async fn get_all(&self) -> Result<Vec<Season>, AppError> {
        let repo = SeasonRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets the seasons the user administers or moderates.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Season>, AppError> {
        let repo = SeasonRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Updates an active season.
    ///
    /// # Returns
    /// - `Ok(Season)` - The updated season
    /// - `Err(AppError::NotFound)` - Season does not exist
    /// - `Err(AppError::ValidationErr(SeasonArchived))` - Season is archived
    /// - `Err(AppError::ValidationErr(NameRequired))` - Blank name
    pub async fn update(&self, params: UpdateSeasonParams) -> Result<Season, AppError> {
        let repo = SeasonRepository::new(self.db);

        let existing = self.get_existing(params.id).await?;
        existing.ensure_active()?;

        let season = repo
            .update(UpdateSeasonParams {
                id: params.id,
                name: normalize::name(&params.name)?,
                description: params.description.trim().to_string(),
                is_archived: params.is_archived,
            })
            .await?;

        Ok(season)
    }

    /// Flips the archive flag of a season.
    pub async fn toggle_archive(&self, id: i32) -> Result<Season, AppError> {
        let repo = SeasonRepository::new(self.db);

        let existing = self.get_existing(id).await?;
        let season = repo.set_archived(id, !existing.is_archived).await?;

        tracing::info!(
            "Season {} is now {}",
            season.id,
            if season.is_archived { "archived" } else { "active" }
        );

        Ok(season)
    }

    /// Deletes a season with everything in it, archived or not.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SeasonRepository::new(self.db);

        self.get_existing(id).await?;
        repo.delete(id).await?;

        tracing::info!("Deleted season {}", id);

        Ok(())
    }
}
