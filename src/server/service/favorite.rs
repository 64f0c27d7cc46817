use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, season::SeasonRepository},
    error::{validation::ValidationError, AppError},
    model::{favorite::Favorite, season::Season},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a season as favorite for a user.
    pub async fn add(&self, user_id: i32, season_id: i32) -> Result<Favorite, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if SeasonRepository::new(self.db)
            .get_by_id(season_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("SeasonNotFound"));
        }

        if repo.exists(user_id, season_id).await? {
            return Err(ValidationError::FavoriteExists.into());
        }

        repo.create(user_id, season_id)
            .await
            .map_err(|err| AppError::unique_violation(err, |_| ValidationError::FavoriteExists))
    }

    pub async fn remove(&self, user_id: i32, season_id: i32) -> Result<(), AppError> {
        let repo = FavoriteRepository::new(self.db);

        if !repo.delete(user_id, season_id).await? {
            return Err(AppError::not_found("FavoriteNotFound"));
        }

        Ok(())
    }

    pub async fn get_seasons(&self, user_id: i32) -> Result<Vec<Season>, AppError> {
        let repo = FavoriteRepository::new(self.db);

        Ok(repo.get_seasons_by_user(user_id).await?)
    }
}
