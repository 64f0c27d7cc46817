//! Business logic layer.
//!
//! Services validate and normalize input, enforce cross-entity rules such as
//! per-season uniqueness, and orchestrate repositories. Access control is left
//! to the controllers and `AuthGuard`.

pub mod auth;
pub mod driver;
pub mod favorite;
pub mod permission;
pub mod race;
pub mod result;
pub mod season;
pub mod statistics;
pub mod team;
pub mod user;
