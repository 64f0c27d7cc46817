use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::permission::PermissionService,
    state::AppState,
};

/// Id of the user a valid bearer token was issued to.
///
/// Extracting it only proves the token is well formed and unexpired; use
/// [`AuthGuard`] to confirm the user still exists and holds a season role.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i32,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AuthError::MissingToken)?;

        let user_id = state.jwt.verify(bearer.token())?;

        Ok(Self { user_id })
    }
}

pub enum Permission {
    /// User is the Admin of the season.
    SeasonAdmin(i32),
    /// User is the Admin or a Moderator of the season.
    SeasonAdminModerator(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthUser,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthUser) -> Self {
        Self { db, auth }
    }

    /// Resolves the token's user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - User exists and holds all listed permissions
    /// - `Err(AuthError::UserNotInDatabase)` - Token refers to a deleted account
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_id = self.auth.user_id;

        let Some(user) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let permission_service = PermissionService::new(self.db);

        for permission in permissions {
            match permission {
                Permission::SeasonAdmin(season_id) => {
                    if !permission_service.is_admin(user_id, *season_id).await? {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("requires admin permission on season {}", season_id),
                        )
                        .into());
                    }
                }
                Permission::SeasonAdminModerator(season_id) => {
                    if !permission_service
                        .is_admin_moderator(user_id, *season_id)
                        .await?
                    {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "requires admin or moderator permission on season {}",
                                season_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
