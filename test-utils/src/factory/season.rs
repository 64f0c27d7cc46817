//! Season factory for creating test season entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seasons with customizable fields.
///
/// Creates only the season row; use `helpers::create_season_with_admin` when the
/// test needs the admin permission as well.
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    is_archived: bool,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new SeasonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Season {id}"`
    /// - description: empty
    /// - is_archived: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Season {}", id),
            description: String::new(),
            is_archived: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn archived(mut self, is_archived: bool) -> Self {
        self.is_archived = is_archived;
        self
    }

    /// Builds and inserts the season entity into the database.
    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            is_archived: ActiveValue::Set(self.is_archived),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active season with default values.
pub async fn create_season(db: &DatabaseConnection) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db).build().await
}

/// Creates an archived season with default values.
pub async fn create_archived_season(
    db: &DatabaseConnection,
) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db).archived(true).build().await
}
