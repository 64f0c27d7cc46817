//! Season Manager Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the season
//! manager. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for every entity.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_season_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_season_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (admin, season) = factory::helpers::create_season_with_admin(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
