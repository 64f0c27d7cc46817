//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types, and controllers convert
//! them into DTOs before responding.

pub mod driver;
pub mod favorite;
pub mod permission;
pub mod race;
pub mod result;
pub mod season;
pub mod statistics;
pub mod team;
pub mod user;
