//! Data transfer objects shared by the API layer.
//!
//! Every type here is serialized to or deserialized from a JSON body using
//! snake_case field names.

pub mod api;
pub mod driver;
pub mod favorite;
pub mod permission;
pub mod race;
pub mod result;
pub mod season;
pub mod statistics;
pub mod team;
pub mod user;
