use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamDto {
    pub id: i32,
    pub season_id: i32,
    pub name: String,
    /// Upper case `#RRGGBB`
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateTeamDto {
    pub name: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateTeamDto {
    pub name: String,
    pub color: String,
}
