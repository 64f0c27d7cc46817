use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RaceDto {
    pub id: i32,
    pub season_id: i32,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateRaceDto {
    pub name: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateRaceDto {
    pub name: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}
