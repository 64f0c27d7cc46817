pub mod driver;
pub mod favorite;
pub mod permission;
pub mod race;
pub mod result;
pub mod season;
pub mod team;
pub mod user;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, AuthUser, Permission},
    model::season::Season,
    service::season::SeasonService,
    state::AppState,
};

/// Checks the caller may change the contents of a season.
///
/// Order of checks decides the status code: a missing season is a 404 before
/// access is considered, and an archived season is only reported to users who
/// could otherwise edit it.
///
/// # Returns
/// - `Ok(Season)` - Season exists, user is its Admin or a Moderator, season is active
/// - `Err(AppError::NotFound)` - Season does not exist
/// - `Err(AppError::AuthErr)` - User missing or without a role on the season
/// - `Err(AppError::ValidationErr(SeasonArchived))` - Season is archived
pub(crate) async fn require_season_editor(
    state: &AppState,
    auth: &AuthUser,
    season_id: i32,
) -> Result<Season, AppError> {
    let season = SeasonService::new(&state.db).get_existing(season_id).await?;

    AuthGuard::new(&state.db, auth)
        .require(&[Permission::SeasonAdminModerator(season.id)])
        .await?;

    season.ensure_active()?;

    Ok(season)
}
