pub mod jwt;
pub mod normalize;
pub mod password;
