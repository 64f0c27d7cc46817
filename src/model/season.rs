use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SeasonDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateSeasonDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateSeasonDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_archived: bool,
}
