use crate::server::{data::driver::DriverRepository, model::driver::CreateDriverParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_name;
mod number_exists;

fn params(season_id: i32, name: &str, number: i32) -> CreateDriverParams {
    CreateDriverParams {
        season_id,
        actual_team_id: None,
        name: name.to_string(),
        number,
        nationality: None,
    }
}
