use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DriverDto {
    pub id: i32,
    pub season_id: i32,
    pub actual_team_id: Option<i32>,
    pub name: String,
    pub number: i32,
    pub nationality: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateDriverDto {
    pub name: String,
    pub number: i32,
    #[serde(default)]
    pub actual_team_id: Option<i32>,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateDriverDto {
    pub name: String,
    pub number: i32,
    #[serde(default)]
    pub actual_team_id: Option<i32>,
    #[serde(default)]
    pub nationality: Option<String>,
}
