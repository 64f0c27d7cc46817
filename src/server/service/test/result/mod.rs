use crate::server::{
    error::{validation::ValidationError, AppError},
    model::result::{CreateResultParams, ResultFields, UpdateResultParams},
    service::result::ResultService,
};
use entity::result::ResultType;
use test_utils::{builder::TestBuilder, factory};

mod update;

fn fields(driver_id: i32, team_id: i32, race_id: i32) -> ResultFields {
    ResultFields {
        driver_id,
        team_id,
        race_id,
        result_type: ResultType::Finished,
        position: Some(1),
        point: 25.0,
    }
}
