use crate::model::favorite::FavoriteDto;

/// A season bookmarked by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub season_id: i32,
}

impl Favorite {
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            season_id: self.season_id,
        }
    }

    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            season_id: entity.season_id,
        }
    }
}
