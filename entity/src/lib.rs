//! SeaORM entity definitions for the season manager schema.

pub mod prelude;

pub mod driver;
pub mod favorite;
pub mod permission;
pub mod race;
pub mod result;
pub mod season;
pub mod team;
pub mod user;
