use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::server::{
    controller::{driver, favorite, permission, race, result, season, team, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/user", get(user::get_user).put(user::update_user).delete(user::delete_user))
        .route("/api/user/register", post(user::register))
        .route("/api/user/login", post(user::login))
        .route("/api/user/password", put(user::change_password))
        .route("/api/season", get(season::get_seasons).post(season::create_season))
        .route("/api/season/user", get(season::get_user_seasons))
        .route(
            "/api/season/{id}",
            get(season::get_season)
                .put(season::update_season)
                .delete(season::delete_season),
        )
        .route("/api/season/{id}/archive", put(season::toggle_archive))
        .route("/api/season/{id}/standings", get(season::get_standings))
        .route(
            "/api/season/{id}/permission",
            get(permission::get_season_permissions).post(permission::add_moderator),
        )
        .route(
            "/api/season/{id}/team",
            get(team::get_season_teams).post(team::create_team),
        )
        .route(
            "/api/season/{id}/driver",
            get(driver::get_season_drivers).post(driver::create_driver),
        )
        .route(
            "/api/season/{id}/race",
            get(race::get_season_races).post(race::create_race),
        )
        .route(
            "/api/season/{id}/result",
            get(result::get_season_results).post(result::create_result),
        )
        .route("/api/permission/{id}", delete(permission::delete_permission))
        .route("/api/permission/{id}/promote", put(permission::promote))
        .route(
            "/api/team/{id}",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        .route(
            "/api/driver/{id}",
            get(driver::get_driver)
                .put(driver::update_driver)
                .delete(driver::delete_driver),
        )
        .route(
            "/api/driver/statistics/{name}",
            get(driver::get_driver_statistics),
        )
        .route(
            "/api/race/{id}",
            get(race::get_race)
                .put(race::update_race)
                .delete(race::delete_race),
        )
        .route("/api/race/{id}/result", get(race::get_race_results))
        .route(
            "/api/result/{id}",
            get(result::get_result)
                .put(result::update_result)
                .delete(result::delete_result),
        )
        .route("/api/favorite", get(favorite::get_favorites))
        .route(
            "/api/favorite/{season_id}",
            post(favorite::add_favorite).delete(favorite::remove_favorite),
        )
}
