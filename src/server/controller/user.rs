use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::user::{ChangePasswordDto, LoginDto, RegisterUserDto, UpdateUserDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser},
        model::user::{RegisterUserParams, UpdateUserParams},
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Register a new account.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid or taken username or email, password too short
/// - `500 Internal Server Error` - Database error
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let user = service
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with username or email and receive a bearer token.
///
/// # Returns
/// - `200 OK` - Token and the logged in user
/// - `400 Bad Request` - Unknown login or wrong password
/// - `500 Internal Server Error` - Database or token signing error
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let token = service.login(&payload.login, &payload.password).await?;

    Ok((StatusCode::OK, Json(token.into_dto())))
}

/// Get the currently authenticated user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing or invalid token, or the account no longer exists
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update username and email of the current user.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid or taken username or email
/// - `401 Unauthorized` - Not authenticated
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require(&[]).await?;

    let service = UserService::new(&state.db);

    let user = service
        .update(UpdateUserParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the password of the current user.
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - Current password wrong or new password too short
/// - `401 Unauthorized` - Not authenticated
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require(&[]).await?;

    UserService::new(&state.db)
        .change_password(user.id, &payload.current_password, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete the current account.
///
/// Seasons the user administers are deleted with it.
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `401 Unauthorized` - Not authenticated
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require(&[]).await?;

    UserService::new(&state.db).delete(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
