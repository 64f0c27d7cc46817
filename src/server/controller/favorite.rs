use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::season::SeasonDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Get the current user's favorite seasons.
///
/// # Access Control
/// - Any authenticated user
pub async fn get_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require(&[]).await?;

    let seasons = FavoriteService::new(&state.db).get_seasons(user.id).await?;

    let seasons: Vec<SeasonDto> = seasons.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(seasons)))
}

/// Mark a season as favorite.
///
/// # Returns
/// - `201 Created` - The favorite
/// - `400 Bad Request` - Season already a favorite
/// - `404 Not Found` - Season does not exist
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require(&[]).await?;

    let favorite = FavoriteService::new(&state.db)
        .add(user.id, season_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require(&[]).await?;

    FavoriteService::new(&state.db)
        .remove(user.id, season_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
