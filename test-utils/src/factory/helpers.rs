//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating
//! entities together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a season, and an Admin permission linking them.
///
/// Mirrors what season creation does in the application so tests start from a
/// season that satisfies the single-admin invariant.
///
/// # Returns
/// - `Ok((user, season))` - The season admin and the created season
/// - `Err(DbErr)` - Database error during creation
pub async fn create_season_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::season::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let season = crate::factory::season::create_season(db).await?;
    crate::factory::permission::create_admin(db, user.id, season.id).await?;

    Ok((user, season))
}

/// Creates a complete result hierarchy inside an existing season.
///
/// Creates a team, a driver racing for it, a race, and a finished result in
/// first position worth 25 points.
///
/// # Returns
/// - `Ok((team, driver, race, result))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_result_with_dependencies(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<
    (
        entity::team::Model,
        entity::driver::Model,
        entity::race::Model,
        entity::result::Model,
    ),
    DbErr,
> {
    let team = crate::factory::team::create_team(db, season_id).await?;
    let driver = crate::factory::driver::DriverFactory::new(db, season_id)
        .actual_team_id(Some(team.id))
        .build()
        .await?;
    let race = crate::factory::race::create_race(db, season_id).await?;
    let result = crate::factory::result::create_result(db, driver.id, team.id, race.id).await?;

    Ok((team, driver, race, result))
}
