use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::permission::{AddModeratorDto, PermissionDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser, Permission},
        service::{permission::PermissionService, season::SeasonService},
        state::AppState,
    },
};

/// Get all permissions of a season, Admin first.
///
/// # Access Control
/// - `SeasonAdminModerator` - Admin or Moderator of the season
///
/// # Returns
/// - `200 OK` - Permissions with usernames
/// - `403 Forbidden` - User has no role on the season
/// - `404 Not Found` - Season does not exist
pub async fn get_season_permissions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_existing(season_id).await?;

    AuthGuard::new(&state.db, &auth)
        .require(&[Permission::SeasonAdminModerator(season.id)])
        .await?;

    let permissions = PermissionService::new(&state.db)
        .get_by_season(season.id)
        .await?;

    let permissions: Vec<PermissionDto> = permissions.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(permissions)))
}

/// Add a Moderator to a season by username.
///
/// # Access Control
/// - `SeasonAdmin` - Only the season's Admin
///
/// # Returns
/// - `201 Created` - New moderator permission
/// - `400 Bad Request` - User already has a role on the season
/// - `403 Forbidden` - User is not the season's Admin
/// - `404 Not Found` - Season or user does not exist
pub async fn add_moderator(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
    Json(payload): Json<AddModeratorDto>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_existing(season_id).await?;

    AuthGuard::new(&state.db, &auth)
        .require(&[Permission::SeasonAdmin(season.id)])
        .await?;

    let permission = PermissionService::new(&state.db)
        .add_moderator(season.id, &payload.username)
        .await?;

    Ok((StatusCode::CREATED, Json(permission.into_dto())))
}

/// Promote a Moderator to Admin. The current Admin becomes a Moderator.
///
/// # Access Control
/// - `SeasonAdmin` - Only the season's Admin
///
/// # Returns
/// - `200 OK` - The promoted permission
/// - `400 Bad Request` - Permission already is the Admin
/// - `403 Forbidden` - User is not the season's Admin
/// - `404 Not Found` - Permission does not exist
pub async fn promote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(permission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PermissionService::new(&state.db);
    let permission = service.get_existing(permission_id).await?;

    AuthGuard::new(&state.db, &auth)
        .require(&[Permission::SeasonAdmin(permission.season_id)])
        .await?;

    let permission = service.promote(permission.id).await?;

    Ok((StatusCode::OK, Json(permission.into_dto())))
}

/// Remove a permission.
///
/// # Access Control
/// - `SeasonAdmin` - The Admin may remove any Moderator
/// - Moderators may remove their own permission to leave the season
///
/// # Returns
/// - `204 No Content` - Permission removed
/// - `400 Bad Request` - Permission is the Admin permission
/// - `403 Forbidden` - Neither Admin nor the permission's own user
/// - `404 Not Found` - Permission does not exist
pub async fn delete_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(permission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PermissionService::new(&state.db);
    let permission = service.get_existing(permission_id).await?;

    let guard = AuthGuard::new(&state.db, &auth);
    if permission.user_id == auth.user_id {
        guard.require(&[]).await?;
    } else {
        guard
            .require(&[Permission::SeasonAdmin(permission.season_id)])
            .await?;
    }

    service.remove(permission.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
