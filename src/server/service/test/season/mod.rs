use crate::server::{
    error::{validation::ValidationError, AppError},
    model::season::{CreateSeasonParams, UpdateSeasonParams},
    service::{permission::PermissionService, season::SeasonService},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
