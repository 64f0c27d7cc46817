//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    name: String,
    color: String,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory for the season.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - color: `"#FFFFFF"`
    pub fn new(db: &'a DatabaseConnection, season_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            season_id,
            name: format!("Team {}", id),
            color: "#FFFFFF".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored color. No normalization is applied.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            season_id: ActiveValue::Set(self.season_id),
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values in the season.
pub async fn create_team(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, season_id).build().await
}
