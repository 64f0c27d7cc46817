use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    server::{
        controller::require_season_editor,
        error::AppError,
        middleware::auth::AuthUser,
        model::team::{CreateTeamParams, UpdateTeamParams},
        service::{season::SeasonService, team::TeamService},
        state::AppState,
    },
};

/// Get all teams of a season ordered by name.
///
/// # Returns
/// - `200 OK` - Teams of the season
/// - `404 Not Found` - Season does not exist
pub async fn get_season_teams(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_existing(season_id).await?;

    let teams = TeamService::new(&state.db).get_by_season(season.id).await?;

    let teams: Vec<TeamDto> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Create a team in a season.
///
/// # Access Control
/// - `SeasonAdminModerator` - Admin or Moderator of the season
///
/// # Returns
/// - `201 Created` - The created team with normalized color
/// - `400 Bad Request` - Blank or taken name, invalid color, or season archived
/// - `403 Forbidden` - User has no role on the season
/// - `404 Not Found` - Season does not exist
pub async fn create_team(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(season_id): Path<i32>,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let season = require_season_editor(&state, &auth, season_id).await?;

    let team = TeamService::new(&state.db)
        .create(CreateTeamParams::from_dto(season.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_existing(team_id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Update name and color of a team.
///
/// # Access Control
/// - `SeasonAdminModerator` - Admin or Moderator of the team's season
pub async fn update_team(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);
    let team = service.get_existing(team_id).await?;

    require_season_editor(&state, &auth, team.season_id).await?;

    let team = service
        .update(UpdateTeamParams::from_dto(team.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team.
///
/// Drivers of the team lose their current team and the team's results are
/// deleted.
///
/// # Access Control
/// - `SeasonAdminModerator` - Admin or Moderator of the team's season
pub async fn delete_team(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);
    let team = service.get_existing(team_id).await?;

    require_season_editor(&state, &auth, team.season_id).await?;

    service.delete(team.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
