//! Aggregated standings and driver career statistics.

use crate::model::statistics::{
    DriverSeasonDto, DriverStandingDto, DriverStatisticsDto, PositionCountDto, SeasonStandingsDto,
    TeamStandingDto,
};

/// One driver's line in a season's championship table.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverStanding {
    /// 1-based rank.
    pub position: u32,
    pub driver_id: i32,
    pub name: String,
    pub number: i32,
    pub team_name: Option<String>,
    pub team_color: Option<String>,
    pub points: f64,
    pub wins: u32,
    pub podiums: u32,
}

impl DriverStanding {
    pub fn into_dto(self) -> DriverStandingDto {
        DriverStandingDto {
            position: self.position,
            driver_id: self.driver_id,
            name: self.name,
            number: self.number,
            team_name: self.team_name,
            team_color: self.team_color,
            points: self.points,
            wins: self.wins,
            podiums: self.podiums,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamStanding {
    pub position: u32,
    pub team_id: i32,
    pub name: String,
    pub color: String,
    pub points: f64,
}

impl TeamStanding {
    pub fn into_dto(self) -> TeamStandingDto {
        TeamStandingDto {
            position: self.position,
            team_id: self.team_id,
            name: self.name,
            color: self.color,
            points: self.points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonStandings {
    pub season_id: i32,
    pub drivers: Vec<DriverStanding>,
    pub teams: Vec<TeamStanding>,
}

impl SeasonStandings {
    pub fn into_dto(self) -> SeasonStandingsDto {
        SeasonStandingsDto {
            season_id: self.season_id,
            drivers: self.drivers.into_iter().map(DriverStanding::into_dto).collect(),
            teams: self.teams.into_iter().map(TeamStanding::into_dto).collect(),
        }
    }
}

/// How a driver placed in one season.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSeason {
    pub season_id: i32,
    pub season_name: String,
    pub team_name: Option<String>,
    pub team_color: Option<String>,
    pub position: u32,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionCount {
    pub position: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverStatistics {
    pub name: String,
    pub total_races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub championships: u32,
    pub total_points: f64,
    pub seasons: Vec<DriverSeason>,
    pub positions: Vec<PositionCount>,
}

impl DriverStatistics {
    pub fn into_dto(self) -> DriverStatisticsDto {
        DriverStatisticsDto {
            name: self.name,
            total_races: self.total_races,
            wins: self.wins,
            podiums: self.podiums,
            championships: self.championships,
            total_points: self.total_points,
            seasons: self
                .seasons
                .into_iter()
                .map(|s| DriverSeasonDto {
                    season_id: s.season_id,
                    season_name: s.season_name,
                    team_name: s.team_name,
                    team_color: s.team_color,
                    position: s.position,
                    points: s.points,
                })
                .collect(),
            positions: self
                .positions
                .into_iter()
                .map(|p| PositionCountDto {
                    position: p.position,
                    count: p.count,
                })
                .collect(),
        }
    }
}
