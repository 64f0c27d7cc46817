//! Race factory for creating test race entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test races with customizable fields.
pub struct RaceFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    name: String,
    date: Option<DateTime<Utc>>,
}

impl<'a> RaceFactory<'a> {
    /// Creates a new RaceFactory for the season.
    ///
    /// Defaults:
    /// - name: `"Grand Prix {id}"`
    /// - date: none
    pub fn new(db: &'a DatabaseConnection, season_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            season_id,
            name: format!("Grand Prix {}", id),
            date: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the race entity into the database.
    pub async fn build(self) -> Result<entity::race::Model, DbErr> {
        entity::race::ActiveModel {
            season_id: ActiveValue::Set(self.season_id),
            name: ActiveValue::Set(self.name),
            date: ActiveValue::Set(self.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an undated race in the season.
pub async fn create_race(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<entity::race::Model, DbErr> {
    RaceFactory::new(db, season_id).build().await
}
