pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_season_table;
mod m20250301_000003_create_permission_table;
mod m20250301_000004_create_team_table;
mod m20250301_000005_create_driver_table;
mod m20250301_000006_create_race_table;
mod m20250301_000007_create_result_table;
mod m20250301_000008_create_favorite_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_season_table::Migration),
            Box::new(m20250301_000003_create_permission_table::Migration),
            Box::new(m20250301_000004_create_team_table::Migration),
            Box::new(m20250301_000005_create_driver_table::Migration),
            Box::new(m20250301_000006_create_race_table::Migration),
            Box::new(m20250301_000007_create_result_table::Migration),
            Box::new(m20250301_000008_create_favorite_table::Migration),
        ]
    }
}
