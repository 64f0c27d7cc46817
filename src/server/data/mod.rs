//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Multi-row mutations that must be atomic open their own transaction.

pub mod driver;
pub mod favorite;
pub mod permission;
pub mod race;
pub mod result;
pub mod season;
pub mod team;
pub mod user;
