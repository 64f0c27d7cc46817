//! Season permission domain models.
//!
//! A user holds at most one permission per season. Each season has exactly one
//! `Admin` permission; every other permission is a `Moderator`.

use entity::permission::PermissionType;

use crate::model::permission::{PermissionDto, PermissionTypeDto};

/// Permission of a user on a season, with the username resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonPermission {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub season_id: i32,
    pub permission_type: PermissionType,
}

impl SeasonPermission {
    pub fn into_dto(self) -> PermissionDto {
        PermissionDto {
            id: self.id,
            user_id: self.user_id,
            username: self.username,
            season_id: self.season_id,
            permission_type: permission_type_into_dto(self.permission_type),
        }
    }

    /// Builds the domain model from a permission row and its owning user row.
    pub fn from_entity(entity: entity::permission::Model, user: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            username: user.username,
            season_id: entity.season_id,
            permission_type: entity.permission_type,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.permission_type == PermissionType::Admin
    }
}

pub fn permission_type_into_dto(permission_type: PermissionType) -> PermissionTypeDto {
    match permission_type {
        PermissionType::Moderator => PermissionTypeDto::Moderator,
        PermissionType::Admin => PermissionTypeDto::Admin,
    }
}
