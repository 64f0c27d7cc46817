use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub season_id: i32,
}
