//! Race result domain models and parameters.
//!
//! A result records how one driver, racing for one team, ended one race. Only
//! `Finished` results carry a position.

use entity::result::ResultType;

use crate::model::result::{CreateResultDto, ResultDto, ResultTypeDto, UpdateResultDto};

#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    pub id: i32,
    pub driver_id: i32,
    pub team_id: i32,
    pub race_id: i32,
    pub result_type: ResultType,
    /// Set and greater than zero iff `result_type` is `Finished`.
    pub position: Option<i32>,
    /// Non-negative multiple of 0.5.
    pub point: f64,
}

impl RaceResult {
    pub fn into_dto(self) -> ResultDto {
        ResultDto {
            id: self.id,
            driver_id: self.driver_id,
            team_id: self.team_id,
            race_id: self.race_id,
            result_type: result_type_into_dto(self.result_type),
            position: self.position,
            point: self.point,
        }
    }

    pub fn from_entity(entity: entity::result::Model) -> Self {
        Self {
            id: entity.id,
            driver_id: entity.driver_id,
            team_id: entity.team_id,
            race_id: entity.race_id,
            result_type: entity.result_type,
            position: entity.position,
            point: entity.point,
        }
    }

    pub fn is_win(&self) -> bool {
        self.position == Some(1)
    }

    pub fn is_podium(&self) -> bool {
        matches!(self.position, Some(1..=3))
    }

    /// Histogram key: the finishing position, or `DNF` / `DNS` / `DSQ`.
    pub fn position_key(&self) -> String {
        match (self.result_type, self.position) {
            (ResultType::Finished, Some(position)) => position.to_string(),
            (ResultType::Finished, None) => "Finished".to_string(),
            (ResultType::Dns, _) => "DNS".to_string(),
            (ResultType::Dnf, _) => "DNF".to_string(),
            (ResultType::Dsq, _) => "DSQ".to_string(),
        }
    }
}

pub fn result_type_into_dto(result_type: ResultType) -> ResultTypeDto {
    match result_type {
        ResultType::Finished => ResultTypeDto::Finished,
        ResultType::Dns => ResultTypeDto::Dns,
        ResultType::Dnf => ResultTypeDto::Dnf,
        ResultType::Dsq => ResultTypeDto::Dsq,
    }
}

pub fn result_type_from_dto(dto: ResultTypeDto) -> ResultType {
    match dto {
        ResultTypeDto::Finished => ResultType::Finished,
        ResultTypeDto::Dns => ResultType::Dns,
        ResultTypeDto::Dnf => ResultType::Dnf,
        ResultTypeDto::Dsq => ResultType::Dsq,
    }
}

/// Result fields shared by create and update, before normalization.
#[derive(Debug, Clone)]
pub struct ResultFields {
    pub driver_id: i32,
    pub team_id: i32,
    pub race_id: i32,
    pub result_type: ResultType,
    pub position: Option<i32>,
    pub point: f64,
}

#[derive(Debug, Clone)]
pub struct CreateResultParams {
    /// Season the request targets; driver, team and race must all belong to it.
    pub season_id: i32,
    pub fields: ResultFields,
}

impl CreateResultParams {
    pub fn from_dto(season_id: i32, dto: CreateResultDto) -> Self {
        Self {
            season_id,
            fields: ResultFields {
                driver_id: dto.driver_id,
                team_id: dto.team_id,
                race_id: dto.race_id,
                result_type: result_type_from_dto(dto.result_type),
                position: dto.position,
                point: dto.point,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateResultParams {
    pub id: i32,
    pub fields: ResultFields,
}

impl UpdateResultParams {
    pub fn from_dto(id: i32, dto: UpdateResultDto) -> Self {
        Self {
            id,
            fields: ResultFields {
                driver_id: dto.driver_id,
                team_id: dto.team_id,
                race_id: dto.race_id,
                result_type: result_type_from_dto(dto.result_type),
                position: dto.position,
                point: dto.point,
            },
        }
    }
}
