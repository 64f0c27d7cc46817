use serde::{Deserialize, Serialize};

/// Career statistics of every driver sharing a name across seasons.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DriverStatisticsDto {
    pub name: String,
    pub total_races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub championships: u32,
    pub total_points: f64,
    pub seasons: Vec<DriverSeasonDto>,
    pub positions: Vec<PositionCountDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DriverSeasonDto {
    pub season_id: i32,
    pub season_name: String,
    pub team_name: Option<String>,
    pub team_color: Option<String>,
    pub position: u32,
    pub points: f64,
}

/// Number of times a driver finished with a given classification.
///
/// `position` is either a finishing position (`"1"`, `"2"`, ...) or one of
/// `DNF`, `DNS`, `DSQ`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PositionCountDto {
    pub position: String,
    pub count: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SeasonStandingsDto {
    pub season_id: i32,
    pub drivers: Vec<DriverStandingDto>,
    pub teams: Vec<TeamStandingDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DriverStandingDto {
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

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamStandingDto {
    pub position: u32,
    pub team_id: i32,
    pub name: String,
    pub color: String,
    pub points: f64,
}
