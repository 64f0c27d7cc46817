//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler
//! through Axum's state extraction. It holds the database connection pool and the
//! bearer token service.

use sea_orm::DatabaseConnection;

use crate::server::util::jwt::JwtService;

/// Shared resources for request handlers.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `JwtService` only holds the derived signing keys.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub jwt: JwtService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtService) -> Self {
        Self { db, jwt }
    }
}
