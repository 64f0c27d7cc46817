use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegisterUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginDto {
    /// Username or email address
    pub login: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TokenDto {
    pub token: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateUserDto {
    pub username: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}
