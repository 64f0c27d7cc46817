//! Team domain models and parameters.

use crate::model::team::{CreateTeamDto, TeamDto, UpdateTeamDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub season_id: i32,
    pub name: String,
    /// Normalized upper case `#RRGGBB`.
    pub color: String,
}

impl Team {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            season_id: self.season_id,
            name: self.name,
            color: self.color,
        }
    }

    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            season_id: entity.season_id,
            name: entity.name,
            color: entity.color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub season_id: i32,
    pub name: String,
    pub color: String,
}

impl CreateTeamParams {
    pub fn from_dto(season_id: i32, dto: CreateTeamDto) -> Self {
        Self {
            season_id,
            name: dto.name,
            color: dto.color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub id: i32,
    pub name: String,
    pub color: String,
}

impl UpdateTeamParams {
    pub fn from_dto(id: i32, dto: UpdateTeamDto) -> Self {
        Self {
            id,
            name: dto.name,
            color: dto.color,
        }
    }
}
