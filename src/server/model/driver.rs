//! Driver domain models and parameters.

use crate::model::driver::{CreateDriverDto, DriverDto, UpdateDriverDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub season_id: i32,
    /// Team the driver currently races for, always in the same season.
    pub actual_team_id: Option<i32>,
    pub name: String,
    pub number: i32,
    /// ISO 3166 alpha-2 code, upper case.
    pub nationality: Option<String>,
}

impl Driver {
    pub fn into_dto(self) -> DriverDto {
        DriverDto {
            id: self.id,
            season_id: self.season_id,
            actual_team_id: self.actual_team_id,
            name: self.name,
            number: self.number,
            nationality: self.nationality,
        }
    }

    pub fn from_entity(entity: entity::driver::Model) -> Self {
        Self {
            id: entity.id,
            season_id: entity.season_id,
            actual_team_id: entity.actual_team_id,
            name: entity.name,
            number: entity.number,
            nationality: entity.nationality,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDriverParams {
    pub season_id: i32,
    pub actual_team_id: Option<i32>,
    pub name: String,
    pub number: i32,
    pub nationality: Option<String>,
}

impl CreateDriverParams {
    pub fn from_dto(season_id: i32, dto: CreateDriverDto) -> Self {
        Self {
            season_id,
            actual_team_id: dto.actual_team_id,
            name: dto.name,
            number: dto.number,
            nationality: dto.nationality,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateDriverParams {
    pub id: i32,
    pub actual_team_id: Option<i32>,
    pub name: String,
    pub number: i32,
    pub nationality: Option<String>,
}

impl UpdateDriverParams {
    pub fn from_dto(id: i32, dto: UpdateDriverDto) -> Self {
        Self {
            id,
            actual_team_id: dto.actual_team_id,
            name: dto.name,
            number: dto.number,
            nationality: dto.nationality,
        }
    }
}
