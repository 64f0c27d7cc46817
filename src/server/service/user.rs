use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{validation::ValidationError, AppError},
    model::user::{UpdateUserParams, User},
    util::{
        normalize,
        password::{hash_password, verify_password},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Changes username and email, applying the registration rules.
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let username = normalize::username(&params.username)?;
        let email = normalize::email(&params.email)?;

        if repo.username_exists(&username, Some(params.id)).await? {
            return Err(ValidationError::UsernameExists.into());
        }
        if repo.email_exists(&email, Some(params.id)).await? {
            return Err(ValidationError::EmailExists.into());
        }

        let user = repo
            .update(UpdateUserParams {
                id: params.id,
                username,
                email,
            })
            .await
            .map_err(|err| AppError::unique_violation(err, account_conflict))?;

        Ok(user)
    }

    /// Replaces the password after checking the current one.
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let credentials = repo
            .get_credentials(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("UserNotFound"))?;

        if !verify_password(current_password, &credentials.password_hash) {
            return Err(ValidationError::IncorrectPassword.into());
        }

        let new_password = normalize::password(new_password)?;
        repo.update_password(user_id, hash_password(new_password))
            .await?;

        Ok(())
    }

    /// Deletes an account together with the seasons it administers.
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.get_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found("UserNotFound"));
        }

        repo.delete(user_id).await?;

        tracing::info!("Deleted user {}", user_id);

        Ok(())
    }
}

/// Usernames and emails are each unique across all accounts.
pub(crate) fn account_conflict(message: &str) -> ValidationError {
    if message.contains("email") {
        ValidationError::EmailExists
    } else {
        ValidationError::UsernameExists
    }
}
