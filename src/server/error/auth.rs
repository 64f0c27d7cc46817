use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature, expiry, or subject validation.
    #[error("Invalid bearer token")]
    InvalidToken,

    /// Token subject refers to a user that no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// User is authenticated but lacks the permission required for the action.
    ///
    /// # Fields
    /// - User ID that was denied
    /// - Description of the denied action, logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login attempted with an unknown user or a wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `InvalidCredentials` → 400 Bad Request
///
/// Denied access is logged at warn level; the client only receives the message key.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, key) = match &self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::AccessDenied(_, _) => {
                tracing::warn!("{}", self);
                (StatusCode::FORBIDDEN, "Forbidden")
            }
            Self::InvalidCredentials => (StatusCode::BAD_REQUEST, "InvalidCredentials"),
        };

        (
            status,
            Json(ErrorDto {
                error: key.to_string(),
            }),
        )
            .into_response()
    }
}
