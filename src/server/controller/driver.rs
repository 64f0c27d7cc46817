use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::driver::{CreateDriverDto, DriverDto, UpdateDriverDto},
    server::{
        controller::require_season_editor,
        error::AppError,
        middleware::auth::AuthUser,
        model::driver::{CreateDriverParams, UpdateDriverParams},
        service::{driver::DriverService, season::SeasonService, statistics::StatisticsService},
        state::AppState,
    },
};

/// Get all drivers of a season ordered by number.
///
/// # Returns
/// - `200 OK` - Drivers of the season
/// - `404 Not Found` - Season does not exist
pub async fn get_season_drivers(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_existing(season_id).await?;

    let drivers = DriverService::new(&state.db)
        .get_by_season(season.id)
        .await?;

    let drivers: Vec<DriverDto> = drivers.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(drivers)))
}

/// Create a driver in a season.
///
/// # Access Control
/// - `SeasonAdminModerator` - Admin or Moderator of the season
///
/// # Returns
/// - `201 Created` - The created driver
/// - `400 Bad Request` - Blank or taken name, taken or negative number, invalid
///   nationality, team from another season, or season archived
/// - `403 Forbidden` - User has no role on the season
/// - `404 Not Found` - Season or team does not exist
pub async fn create_driver(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
    Json(payload): Json<CreateDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let season = require_season_editor(&state, &auth, season_id).await?;

    let driver = DriverService::new(&state.db)
        .create(CreateDriverParams::from_dto(season.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(driver.into_dto())))
}

pub async fn get_driver(
    State(state): State<AppState>,
    Path(driver_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let driver = DriverService::new(&state.db).get_existing(driver_id).await?;

    Ok((StatusCode::OK, Json(driver.into_dto())))
}

pub async fn update_driver(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(driver_id): Path<i32>,
    Json(payload): Json<UpdateDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DriverService::new(&state.db);
    let driver = service.get_existing(driver_id).await?;

    require_season_editor(&state, &auth, driver.season_id).await?;

    let driver = service
        .update(UpdateDriverParams::from_dto(driver.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(driver.into_dto())))
}

/// Delete a driver together with their results.
pub async fn delete_driver(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(driver_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DriverService::new(&state.db);
    let driver = service.get_existing(driver_id).await?;

    require_season_editor(&state, &auth, driver.season_id).await?;

    service.delete(driver.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get career statistics of every driver sharing a name across seasons.
///
/// # Returns
/// - `200 OK` - Totals, per-season standings and position histogram
/// - `404 Not Found` - No driver with that name
pub async fn get_driver_statistics(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let statistics = StatisticsService::new(&state.db)
        .driver_statistics(&name)
        .await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}
