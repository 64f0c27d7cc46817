//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (admin, season) = factory::helpers::create_season_with_admin(&db).await?;
//!
//! let team = factory::team::TeamFactory::new(&db, season.id)
//!     .name("Scuderia")
//!     .color("#FF0000")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `season` - Create season entities
//! - `permission` - Grant admin or moderator permissions
//! - `team` - Create team entities
//! - `driver` - Create driver entities
//! - `race` - Create race entities
//! - `result` - Create race result entities
//! - `favorite` - Create favorite entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod driver;
pub mod favorite;
pub mod helpers;
pub mod permission;
pub mod race;
pub mod result;
pub mod season;
pub mod team;
pub mod user;

pub use driver::create_driver;
pub use favorite::create_favorite;
pub use permission::{create_admin, create_moderator};
pub use race::create_race;
pub use result::create_result;
pub use season::create_season;
pub use team::create_team;
pub use user::create_user;
