use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::result::{CreateResultDto, ResultDto, UpdateResultDto},
    server::{
        controller::require_season_editor,
        error::AppError,
        middleware::auth::AuthUser,
        model::result::{CreateResultParams, UpdateResultParams},
        service::{result::ResultService, season::SeasonService},
        state::AppState,
    },
};

pub async fn get_season_results(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_existing(season_id).await?;

    let results = ResultService::new(&state.db)
        .get_by_season(season.id)
        .await?;

    let results: Vec<ResultDto> = results.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(results)))
}

/// Record a driver's result in a race.
///
/// # Access Control
/// - `SeasonAdminModerator` - Admin or Moderator of the season
///
/// # Returns
/// - `201 Created` - The created result
/// - `400 Bad Request` - Driver, team and race not all in the season, invalid
///   position or points, duplicate result, or season archived
/// - `403 Forbidden` - User has no role on the season
/// - `404 Not Found` - Season, driver, team or race does not exist
pub async fn create_result(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
    Json(payload): Json<CreateResultDto>,
) -> Result<impl IntoResponse, AppError> {
    let season = require_season_editor(&state, &auth, season_id).await?;

    let result = ResultService::new(&state.db)
        .create(CreateResultParams::from_dto(season.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(result.into_dto())))
}

pub async fn get_result(
    State(state): State<AppState>,
    Path(result_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = ResultService::new(&state.db).get_existing(result_id).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Update a result. The new driver, team and race must stay in the result's
/// season.
pub async fn update_result(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(result_id): Path<i32>,
    Json(payload): Json<UpdateResultDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResultService::new(&state.db);
    let result = service.get_existing(result_id).await?;
    let season_id = service.get_season_id(&result).await?;

    require_season_editor(&state, &auth, season_id).await?;

    let result = service
        .update(UpdateResultParams::from_dto(result.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

pub async fn delete_result(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(result_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResultService::new(&state.db);
    let result = service.get_existing(result_id).await?;
    let season_id = service.get_season_id(&result).await?;

    require_season_editor(&state, &auth, season_id).await?;

    service.delete(result.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
