use crate::server::{
    error::{validation::ValidationError, AppError},
    model::user::{UpdateUserParams, User},
    service::user::UserService,
    util::password::hash_password,
};
use test_utils::{builder::TestBuilder, factory};

mod change_password;
mod update;
