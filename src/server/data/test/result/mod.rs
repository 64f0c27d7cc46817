use crate::server::data::result::ResultRepository;
use entity::result::ResultType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_race;
mod get_by_season;
