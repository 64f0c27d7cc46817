//! Driver factory for creating test driver entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drivers with customizable fields.
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    actual_team_id: Option<i32>,
    name: String,
    number: i32,
    nationality: Option<String>,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory for the season.
    ///
    /// Defaults:
    /// - name: `"Driver {id}"`
    /// - number: `1000 + id` (unique across the test run, clear of hand-picked numbers)
    /// - no team, no nationality
    pub fn new(db: &'a DatabaseConnection, season_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            season_id,
            actual_team_id: None,
            name: format!("Driver {}", id),
            number: 1000 + id as i32,
            nationality: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn actual_team_id(mut self, team_id: Option<i32>) -> Self {
        self.actual_team_id = team_id;
        self
    }

    pub fn nationality(mut self, nationality: Option<&str>) -> Self {
        self.nationality = nationality.map(str::to_string);
        self
    }

    /// Builds and inserts the driver entity into the database.
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        entity::driver::ActiveModel {
            season_id: ActiveValue::Set(self.season_id),
            actual_team_id: ActiveValue::Set(self.actual_team_id),
            name: ActiveValue::Set(self.name),
            number: ActiveValue::Set(self.number),
            nationality: ActiveValue::Set(self.nationality),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a driver without a team in the season.
pub async fn create_driver(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db, season_id).build().await
}
