use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTypeDto {
    Finished,
    #[serde(rename = "DNS")]
    Dns,
    #[serde(rename = "DNF")]
    Dnf,
    #[serde(rename = "DSQ")]
    Dsq,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResultDto {
    pub id: i32,
    pub driver_id: i32,
    pub team_id: i32,
    pub race_id: i32,
    pub result_type: ResultTypeDto,
    pub position: Option<i32>,
    pub point: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateResultDto {
    pub driver_id: i32,
    pub team_id: i32,
    pub race_id: i32,
    pub result_type: ResultTypeDto,
    #[serde(default)]
    pub position: Option<i32>,
    pub point: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateResultDto {
    pub driver_id: i32,
    pub team_id: i32,
    pub race_id: i32,
    pub result_type: ResultTypeDto,
    #[serde(default)]
    pub position: Option<i32>,
    pub point: f64,
}
