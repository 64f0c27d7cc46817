use crate::server::{
    data::driver::DriverRepository,
    error::{validation::ValidationError, AppError},
    model::driver::{CreateDriverParams, UpdateDriverParams},
    service::driver::{driver_conflict, DriverService},
};
use test_utils::{builder::TestBuilder, factory};


fn params(season_id: i32, name: &str, number: i32) -> CreateDriverParams {
    CreateDriverParams {
        season_id,
        actual_team_id: None,
        name: name.to_string(),
        number,
        nationality: None,
    }
}
