use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
