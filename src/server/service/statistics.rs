//! Season standings and driver career statistics.
//!
//! Drivers are ranked by summed points, then by wins, then by id. Teams are
//! ranked by the points scored in their name, which follows the team a result
//! was recorded for rather than a driver's current team.

use std::{cmp::Ordering, collections::HashMap};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        driver::DriverRepository, result::ResultRepository, season::SeasonRepository,
        team::TeamRepository,
    },
    error::AppError,
    model::{
        driver::Driver,
        result::RaceResult,
        statistics::{
            DriverSeason, DriverStanding, DriverStatistics, PositionCount, SeasonStandings,
            TeamStanding,
        },
        team::Team,
    },
};

pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the driver and team championship tables of a season.
    pub async fn season_standings(&self, season_id: i32) -> Result<SeasonStandings, AppError> {
        if SeasonRepository::new(self.db)
            .get_by_id(season_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("SeasonNotFound"));
        }

        let drivers = DriverRepository::new(self.db)
            .get_by_season(season_id)
            .await?;
        let teams = TeamRepository::new(self.db).get_by_season(season_id).await?;
        let results = ResultRepository::new(self.db)
            .get_by_season(season_id)
            .await?;

        Ok(SeasonStandings {
            season_id,
            drivers: rank_drivers(&drivers, &teams, &results),
            teams: rank_teams(&teams, &results),
        })
    }

    /// Aggregates the career of every driver named `name` across all seasons.
    ///
    /// # Returns
    /// - `Ok(DriverStatistics)` - Totals, per-season standings and position histogram
    /// - `Err(AppError::NotFound)` - No season has a driver with that name
    pub async fn driver_statistics(&self, name: &str) -> Result<DriverStatistics, AppError> {
        let driver_repo = DriverRepository::new(self.db);
        let season_repo = SeasonRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);
        let result_repo = ResultRepository::new(self.db);

        let name = name.trim();
        let entries = driver_repo.get_by_name(name).await?;
        if entries.is_empty() {
            return Err(AppError::not_found("DriverNotFound"));
        }

        let mut statistics = DriverStatistics {
            name: name.to_string(),
            total_races: 0,
            wins: 0,
            podiums: 0,
            championships: 0,
            total_points: 0.0,
            seasons: Vec::new(),
            positions: Vec::new(),
        };
        let mut own_results: Vec<RaceResult> = Vec::new();

        for entry in entries {
            let Some(season) = season_repo.get_by_id(entry.season_id).await? else {
                continue;
            };

            let drivers = driver_repo.get_by_season(season.id).await?;
            let teams = team_repo.get_by_season(season.id).await?;
            let results = result_repo.get_by_season(season.id).await?;

            let standings = rank_drivers(&drivers, &teams, &results);
            let Some(standing) = standings.into_iter().find(|s| s.driver_id == entry.id) else {
                continue;
            };

            if standing.position == 1 && !results.is_empty() {
                statistics.championships += 1;
            }

            statistics.seasons.push(DriverSeason {
                season_id: season.id,
                season_name: season.name,
                team_name: standing.team_name,
                team_color: standing.team_color,
                position: standing.position,
                points: standing.points,
            });

            own_results.extend(results.into_iter().filter(|r| r.driver_id == entry.id));
        }

        statistics.total_races = own_results.len() as u32;
        statistics.wins = own_results.iter().filter(|r| r.is_win()).count() as u32;
        statistics.podiums = own_results.iter().filter(|r| r.is_podium()).count() as u32;
        statistics.total_points = own_results.iter().map(|r| r.point).sum();
        statistics.positions = position_histogram(&own_results);

        Ok(statistics)
    }
}

#[derive(Default)]
struct Tally {
    points: f64,
    wins: u32,
    podiums: u32,
}

/// Ranks every driver of a season, including drivers without results.
pub fn rank_drivers(
    drivers: &[Driver],
    teams: &[Team],
    results: &[RaceResult],
) -> Vec<DriverStanding> {
    let mut tallies: HashMap<i32, Tally> = HashMap::new();
    for result in results {
        let tally = tallies.entry(result.driver_id).or_default();
        tally.points += result.point;
        if result.is_win() {
            tally.wins += 1;
        }
        if result.is_podium() {
            tally.podiums += 1;
        }
    }

    let teams: HashMap<i32, &Team> = teams.iter().map(|t| (t.id, t)).collect();

    let mut standings: Vec<DriverStanding> = drivers
        .iter()
        .map(|driver| {
            let tally = tallies.remove(&driver.id).unwrap_or_default();
            let team = driver.actual_team_id.and_then(|id| teams.get(&id));

            DriverStanding {
                position: 0,
                driver_id: driver.id,
                name: driver.name.clone(),
                number: driver.number,
                team_name: team.map(|t| t.name.clone()),
                team_color: team.map(|t| t.color.clone()),
                points: tally.points,
                wins: tally.wins,
                podiums: tally.podiums,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then_with(|| b.wins.cmp(&a.wins))
            .then_with(|| a.driver_id.cmp(&b.driver_id))
    });

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.position = index as u32 + 1;
    }

    standings
}

/// Ranks every team of a season by points, ties broken by team id.
pub fn rank_teams(teams: &[Team], results: &[RaceResult]) -> Vec<TeamStanding> {
    let mut points: HashMap<i32, f64> = HashMap::new();
    for result in results {
        *points.entry(result.team_id).or_default() += result.point;
    }

    let mut standings: Vec<TeamStanding> = teams
        .iter()
        .map(|team| TeamStanding {
            position: 0,
            team_id: team.id,
            name: team.name.clone(),
            color: team.color.clone(),
            points: points.get(&team.id).copied().unwrap_or_default(),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then_with(|| a.team_id.cmp(&b.team_id))
    });

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.position = index as u32 + 1;
    }

    standings
}

/// Counts results per finishing position or non-finish classification.
pub fn position_histogram(results: &[RaceResult]) -> Vec<PositionCount> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for result in results {
        *counts.entry(result.position_key()).or_default() += 1;
    }

    let mut histogram: Vec<PositionCount> = counts
        .into_iter()
        .map(|(position, count)| PositionCount { position, count })
        .collect();
    histogram.sort_by(|a, b| compare_position_keys(&a.position, &b.position));

    histogram
}

/// Numbers before strings, numbers numerically, strings lexicographically.
pub fn compare_position_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<u32>(), b.parse::<u32>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
