use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::season::{CreateSeasonDto, SeasonDto, UpdateSeasonDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser, Permission},
        model::season::{CreateSeasonParams, UpdateSeasonParams},
        service::{season::SeasonService, statistics::StatisticsService},
        state::AppState,
    },
};

/// Get all seasons.
///
/// Returns every season, newest first. Public.
///
/// # Returns
/// - `200 OK` - List of seasons
/// - `500 Internal Server Error` - Database error
pub async fn get_seasons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let seasons = SeasonService::new(&state.db).get_all().await?;

    let seasons: Vec<SeasonDto> = seasons.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(seasons)))
}

/// Create a new season.
///
/// The creating user becomes the Admin of the season.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `auth` - Bearer token user
/// - `payload` - Season name and optional description
///
/// # Returns
/// - `201 Created` - The created season
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
pub async fn create_season(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require(&[]).await?;

    let service = SeasonService::new(&state.db);

    let season = service
        .create(CreateSeasonParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(season.into_dto())))
}

/// Get the seasons the current user is Admin or Moderator of.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Seasons with a role for the user
/// - `401 Unauthorized` - Not authenticated
pub async fn get_user_seasons(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require(&[]).await?;

    let seasons = SeasonService::new(&state.db).get_by_user(user.id).await?;

    let seasons: Vec<SeasonDto> = seasons.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(seasons)))
}

/// Get a season by id.
///
/// # Returns
/// - `200 OK` - Season
/// - `404 Not Found` - Season does not exist
pub async fn get_season(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_existing(season_id).await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

/// Update name, description and archive flag of a season.
///
/// # Access Control
/// - `SeasonAdmin` - Only the season's Admin
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `auth` - Bearer token user
/// - `season_id` - Season to update
/// - `payload` - New name, description and archive flag
///
/// # Returns
/// - `200 OK` - Updated season
/// - `400 Bad Request` - Blank name or season archived
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - User is not the season's Admin
/// - `404 Not Found` - Season does not exist
pub async fn update_season(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
    Json(payload): Json<UpdateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SeasonService::new(&state.db);
    let season = service.get_existing(season_id).await?;

    AuthGuard::new(&state.db, &auth)
        .require(&[Permission::SeasonAdmin(season.id)])
        .await?;

    let season = service
        .update(UpdateSeasonParams::from_dto(season.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

/// Toggle whether a season is archived.
///
/// # Access Control
/// - `SeasonAdmin` - Only the season's Admin
///
/// # Returns
/// - `200 OK` - Season with the flipped archive flag
/// - `403 Forbidden` - User is not the season's Admin
/// - `404 Not Found` - Season does not exist
pub async fn toggle_archive(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SeasonService::new(&state.db);
    let season = service.get_existing(season_id).await?;

    AuthGuard::new(&state.db, &auth)
        .require(&[Permission::SeasonAdmin(season.id)])
        .await?;

    let season = service.toggle_archive(season.id).await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

/// Delete a season with all of its teams, drivers, races, results,
/// permissions and favorites.
///
/// # Access Control
/// - `SeasonAdmin` - Only the season's Admin
///
/// # Returns
/// - `204 No Content` - Season deleted
/// - `403 Forbidden` - User is not the season's Admin
/// - `404 Not Found` - Season does not exist
pub async fn delete_season(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SeasonService::new(&state.db);
    let season = service.get_existing(season_id).await?;

    AuthGuard::new(&state.db, &auth)
        .require(&[Permission::SeasonAdmin(season.id)])
        .await?;

    service.delete(season.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get driver and team standings of a season.
///
/// # Returns
/// - `200 OK` - Ranked drivers and teams
/// - `404 Not Found` - Season does not exist
pub async fn get_standings(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let standings = StatisticsService::new(&state.db)
        .season_standings(season_id)
        .await?;

    Ok((StatusCode::OK, Json(standings.into_dto())))
}
