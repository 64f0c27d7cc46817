//! Season domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::season::{CreateSeasonDto, SeasonDto, UpdateSeasonDto},
    server::error::validation::ValidationError,
};

/// A racing season grouping teams, drivers, races and results.
#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Archived seasons are read-only.
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Season {
    pub fn into_dto(self) -> SeasonDto {
        SeasonDto {
            id: self.id,
            name: self.name,
            description: self.description,
            is_archived: self.is_archived,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::season::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            is_archived: entity.is_archived,
            created_at: entity.created_at,
        }
    }

    /// Fails with `SeasonArchived` if the season no longer accepts changes.
    pub fn ensure_active(&self) -> Result<(), ValidationError> {
        if self.is_archived {
            return Err(ValidationError::SeasonArchived);
        }

        Ok(())
    }
}

/// Parameters for creating a season owned by `owner_id`.
#[derive(Debug, Clone)]
pub struct CreateSeasonParams {
    pub owner_id: i32,
    pub name: String,
    pub description: String,
}

impl CreateSeasonParams {
    pub fn from_dto(owner_id: i32, dto: CreateSeasonDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSeasonParams {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub is_archived: bool,
}

impl UpdateSeasonParams {
    pub fn from_dto(id: i32, dto: UpdateSeasonDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            is_archived: dto.is_archived,
        }
    }
}
