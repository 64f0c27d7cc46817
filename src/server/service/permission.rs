//! Season permission evaluation and management.
//!
//! `is_admin` and `is_admin_moderator` are evaluated per request straight from the
//! permission table.

use entity::permission::PermissionType;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{permission::PermissionRepository, user::UserRepository},
    error::{validation::ValidationError, AppError},
    model::permission::SeasonPermission,
};

pub struct PermissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether the user is the Admin of the season.
    pub async fn is_admin(&self, user_id: i32, season_id: i32) -> Result<bool, AppError> {
        let repo = PermissionRepository::new(self.db);

        let permission_type = repo.get_type(user_id, season_id).await?;

        Ok(permission_type == Some(PermissionType::Admin))
    }

    /// Whether the user is the Admin or a Moderator of the season.
    pub async fn is_admin_moderator(&self, user_id: i32, season_id: i32) -> Result<bool, AppError> {
        let repo = PermissionRepository::new(self.db);

        let permission_type = repo.get_type(user_id, season_id).await?;

        Ok(permission_type.is_some())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SeasonPermission>, AppError> {
        let repo = PermissionRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets a permission or fails with `PermissionNotFound`.
    pub async fn get_existing(&self, id: i32) -> Result<SeasonPermission, AppError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("PermissionNotFound"))
    }

    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<SeasonPermission>, AppError> {
        let repo = PermissionRepository::new(self.db);

        Ok(repo.get_by_season(season_id).await?)
    }

    /// Grants Moderator rights on a season to the user with the given username.
    ///
    /// # Returns
    /// - `Ok(SeasonPermission)` - The new moderator permission
    /// - `Err(AppError::NotFound)` - No user with that username
    /// - `Err(AppError::ValidationErr(PermissionExists))` - User already has a role on the season
    pub async fn add_moderator(
        &self,
        season_id: i32,
        username: &str,
    ) -> Result<SeasonPermission, AppError> {
        let repo = PermissionRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::not_found("UserNotFound"))?;

        if repo.get_type(user.id, season_id).await?.is_some() {
            return Err(ValidationError::PermissionExists.into());
        }

        let permission = repo
            .create(user.id, season_id, PermissionType::Moderator)
            .await
            .map_err(|err| AppError::unique_violation(err, |_| ValidationError::PermissionExists))?;

        tracing::info!("User {} is now moderator of season {}", user.id, season_id);

        Ok(permission)
    }

    /// Promotes a Moderator to Admin; the previous Admin becomes a Moderator.
    pub async fn promote(&self, id: i32) -> Result<SeasonPermission, AppError> {
        let repo = PermissionRepository::new(self.db);

        let permission = self.get_existing(id).await?;
        if permission.is_admin() {
            return Err(ValidationError::AlreadyAdmin.into());
        }

        let promoted = repo.promote(id).await?;

        tracing::info!(
            "User {} is now admin of season {}",
            promoted.user_id,
            promoted.season_id
        );

        Ok(promoted)
    }

    /// Removes a Moderator permission. The Admin permission cannot be removed.
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let repo = PermissionRepository::new(self.db);

        let permission = self.get_existing(id).await?;
        if permission.is_admin() {
            return Err(ValidationError::AdminCannotBeRemoved.into());
        }

        repo.delete(id).await?;

        Ok(())
    }
}
