use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        race::{CreateRaceDto, RaceDto, UpdateRaceDto},
        result::ResultDto,
    },
    server::{
        controller::require_season_editor,
        error::AppError,
        middleware::auth::AuthUser,
        model::race::{CreateRaceParams, UpdateRaceParams},
        service::{race::RaceService, result::ResultService, season::SeasonService},
        state::AppState,
    },
};

/// Get the race calendar of a season.
///
/// Dated races come first in date order, undated races last; ties by name.
pub async fn get_season_races(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_existing(season_id).await?;

    let races = RaceService::new(&state.db).get_by_season(season.id).await?;

    let races: Vec<RaceDto> = races.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(races)))
}

/// Create a race in a season.
///
/// # Access Control
/// - `SeasonAdminModerator` - Admin or Moderator of the season
///
/// # Returns
/// - `201 Created` - The created race
/// - `400 Bad Request` - Blank or taken name, or season archived
/// - `403 Forbidden` - User has no role on the season
/// - `404 Not Found` - Season does not exist
pub async fn create_race(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
    Json(payload): Json<CreateRaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let season = require_season_editor(&state, &auth, season_id).await?;

    let race = RaceService::new(&state.db)
        .create(CreateRaceParams::from_dto(season.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(race.into_dto())))
}

pub async fn get_race(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let race = RaceService::new(&state.db).get_existing(race_id).await?;

    Ok((StatusCode::OK, Json(race.into_dto())))
}

pub async fn update_race(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(race_id): Path<i32>,
    Json(payload): Json<UpdateRaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RaceService::new(&state.db);
    let race = service.get_existing(race_id).await?;

    require_season_editor(&state, &auth, race.season_id).await?;

    let race = service
        .update(UpdateRaceParams::from_dto(race.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(race.into_dto())))
}

/// Delete a race together with its results.
pub async fn delete_race(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RaceService::new(&state.db);
    let race = service.get_existing(race_id).await?;

    require_season_editor(&state, &auth, race.season_id).await?;

    service.delete(race.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the results of a race, finishers first by position.
pub async fn get_race_results(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let results = ResultService::new(&state.db).get_by_race(race_id).await?;

    let results: Vec<ResultDto> = results.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(results)))
}
