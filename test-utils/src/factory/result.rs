//! Result factory for creating test race result entities.

use entity::result::ResultType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test race results with customizable fields.
///
/// Writes the row as given; the position/type consistency rules enforced by the
/// application are not applied here.
pub struct ResultFactory<'a> {
    db: &'a DatabaseConnection,
    driver_id: i32,
    team_id: i32,
    race_id: i32,
    result_type: ResultType,
    position: Option<i32>,
    point: f64,
}

impl<'a> ResultFactory<'a> {
    /// Creates a new ResultFactory.
    ///
    /// Defaults: finished in position 1 with 25 points.
    pub fn new(db: &'a DatabaseConnection, driver_id: i32, team_id: i32, race_id: i32) -> Self {
        Self {
            db,
            driver_id,
            team_id,
            race_id,
            result_type: ResultType::Finished,
            position: Some(1),
            point: 25.0,
        }
    }

    /// Marks the result as finished in the given position.
    pub fn finished(mut self, position: i32) -> Self {
        self.result_type = ResultType::Finished;
        self.position = Some(position);
        self
    }

    /// Marks the result as a non-finish (DNS, DNF or DSQ) without a position.
    pub fn not_classified(mut self, result_type: ResultType) -> Self {
        self.result_type = result_type;
        self.position = None;
        self
    }

    pub fn point(mut self, point: f64) -> Self {
        self.point = point;
        self
    }

    /// Builds and inserts the result entity into the database.
    pub async fn build(self) -> Result<entity::result::Model, DbErr> {
        entity::result::ActiveModel {
            driver_id: ActiveValue::Set(self.driver_id),
            team_id: ActiveValue::Set(self.team_id),
            race_id: ActiveValue::Set(self.race_id),
            result_type: ActiveValue::Set(self.result_type),
            position: ActiveValue::Set(self.position),
            point: ActiveValue::Set(self.point),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a first-place result worth 25 points.
pub async fn create_result(
    db: &DatabaseConnection,
    driver_id: i32,
    team_id: i32,
    race_id: i32,
) -> Result<entity::result::Model, DbErr> {
    ResultFactory::new(db, driver_id, team_id, race_id)
        .build()
        .await
}
