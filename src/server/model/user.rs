//! User domain models and parameters.
//!
//! Provides the account model exposed to the rest of the application. The password
//! hash never leaves the data layer except through `UserCredentials`, which is only
//! used for login and password checks.

use crate::model::user::{RegisterUserDto, TokenDto, UpdateUserDto, UserDto};

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Unique email address, stored lower case.
    pub email: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
        }
    }
}

/// User together with the stored password hash.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for registering a new account, before validation.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for inserting a validated account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Parameters for changing an account's username and email.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            username: dto.username,
            email: dto.email,
        }
    }
}

/// Signed bearer token issued on login.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
    pub user: User,
}

impl AuthToken {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            token: self.token,
            user: self.user.into_dto(),
        }
    }
}
