use crate::server::{error::AppError, service::statistics::StatisticsService};
use entity::result::ResultType;
use test_utils::{builder::TestBuilder, factory};
