pub use super::driver::Entity as Driver;
pub use super::favorite::Entity as Favorite;
pub use super::permission::Entity as Permission;
pub use super::race::Entity as Race;
pub use super::result::Entity as RaceResult;
pub use super::season::Entity as Season;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
