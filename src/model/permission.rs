use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionTypeDto {
    Moderator,
    Admin,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PermissionDto {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub season_id: i32,
    pub permission_type: PermissionTypeDto,
}

/// Grants moderator rights on a season to an existing user.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AddModeratorDto {
    pub username: String,
}
