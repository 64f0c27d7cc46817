use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityName, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Season, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Season)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, plus the composite unique indexes the migrations create for
    /// that table. Tables with foreign keys should be added after their referenced
    /// tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut table = schema.create_table_from_entity(entity);
        for mut index in unique_indexes(entity.table_name()) {
            table.index(&mut index);
        }
        self.tables.push(table);
        self
    }

    /// Adds the user and season tables plus the permission table linking them.
    ///
    /// Enough for permission and season lifecycle tests that do not touch
    /// teams, drivers, races or results.
    pub fn with_permission_tables(self) -> Self {
        self.with_table(User)
            .with_table(Season)
            .with_table(Permission)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// - User
    /// - Season
    /// - Permission
    /// - Team
    /// - Driver
    /// - Race
    /// - RaceResult
    /// - Favorite
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_season_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_season_tables(self) -> Self {
        self.with_permission_tables()
            .with_table(Team)
            .with_table(Driver)
            .with_table(Race)
            .with_table(RaceResult)
            .with_table(Favorite)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables created
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

/// Composite unique indexes of a table, named as in the migrations.
///
/// Entities only describe columns, so these have to be added to the generated
/// CREATE TABLE statements by hand.
fn unique_indexes(table: &str) -> Vec<IndexCreateStatement> {
    match table {
        "permission" => vec![Index::create()
            .unique()
            .name("idx_permission_user_season_unique")
            .col(entity::permission::Column::UserId)
            .col(entity::permission::Column::SeasonId)
            .to_owned()],
        "team" => vec![Index::create()
            .unique()
            .name("idx_team_season_name_unique")
            .col(entity::team::Column::SeasonId)
            .col(entity::team::Column::Name)
            .to_owned()],
        "driver" => vec![
            Index::create()
                .unique()
                .name("idx_driver_season_name_unique")
                .col(entity::driver::Column::SeasonId)
                .col(entity::driver::Column::Name)
                .to_owned(),
            Index::create()
                .unique()
                .name("idx_driver_season_number_unique")
                .col(entity::driver::Column::SeasonId)
                .col(entity::driver::Column::Number)
                .to_owned(),
        ],
        "race" => vec![Index::create()
            .unique()
            .name("idx_race_season_name_unique")
            .col(entity::race::Column::SeasonId)
            .col(entity::race::Column::Name)
            .to_owned()],
        "result" => vec![Index::create()
            .unique()
            .name("idx_result_driver_race_unique")
            .col(entity::result::Column::DriverId)
            .col(entity::result::Column::RaceId)
            .to_owned()],
        "favorite" => vec![Index::create()
            .unique()
            .name("idx_favorite_user_season_unique")
            .col(entity::favorite::Column::UserId)
            .col(entity::favorite::Column::SeasonId)
            .to_owned()],
        _ => Vec::new(),
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
