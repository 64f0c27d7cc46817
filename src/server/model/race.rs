//! Race domain models and parameters.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::model::race::{CreateRaceDto, RaceDto, UpdateRaceDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub id: i32,
    pub season_id: i32,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
}

impl Race {
    pub fn into_dto(self) -> RaceDto {
        RaceDto {
            id: self.id,
            season_id: self.season_id,
            name: self.name,
            date: self.date,
        }
    }

    pub fn from_entity(entity: entity::race::Model) -> Self {
        Self {
            id: entity.id,
            season_id: entity.season_id,
            name: entity.name,
            date: entity.date,
        }
    }

    /// Calendar order: dated races first by date, undated races last, ties by name.
    pub fn calendar_cmp(&self, other: &Self) -> Ordering {
        let by_date = match (self.date, other.date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        by_date.then_with(|| self.name.cmp(&other.name))
    }
}

#[derive(Debug, Clone)]
pub struct CreateRaceParams {
    pub season_id: i32,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
}

impl CreateRaceParams {
    pub fn from_dto(season_id: i32, dto: CreateRaceDto) -> Self {
        Self {
            season_id,
            name: dto.name,
            date: dto.date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRaceParams {
    pub id: i32,
    pub name: String,
    pub date: Option<DateTime<Utc>>,
}

impl UpdateRaceParams {
    pub fn from_dto(id: i32, dto: UpdateRaceDto) -> Self {
        Self {
            id,
            name: dto.name,
            date: dto.date,
        }
    }
}
