//! User account repository.

use entity::permission::PermissionType;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::season::delete_season_cascade,
    model::user::{CreateUserParams, UpdateUserParams, User, UserCredentials},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Finds a user by username or email together with the password hash.
    pub async fn find_credentials_by_login(
        &self,
        login: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(login))
                    .add(entity::user::Column::Email.eq(login.to_lowercase())),
            )
            .one(self.db)
            .await?;

        Ok(user.map(UserCredentials::from_entity))
    }

    pub async fn get_credentials(&self, id: i32) -> Result<Option<UserCredentials>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(UserCredentials::from_entity))
    }

    /// Checks whether a username is taken, optionally ignoring one user.
    pub async fn username_exists(
        &self,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Username.eq(username));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether an email is taken, optionally ignoring one user.
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn update(&self, params: UpdateUserParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.username = ActiveValue::Set(params.username);
        active_model.email = ActiveValue::Set(params.email);

        let user = active_model.update(self.db).await?;

        Ok(User::from_entity(user))
    }

    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.password_hash = ActiveValue::Set(password_hash);
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Deletes a user account.
    ///
    /// Seasons the user administers are deleted with their full cascade, then the
    /// user's remaining permissions and favorites, then the user row. Runs in one
    /// transaction.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let administered: Vec<i32> = entity::prelude::Permission::find()
            .select_only()
            .column(entity::permission::Column::SeasonId)
            .filter(entity::permission::Column::UserId.eq(id))
            .filter(entity::permission::Column::PermissionType.eq(PermissionType::Admin))
            .into_tuple()
            .all(&txn)
            .await?;

        for season_id in administered {
            delete_season_cascade(&txn, season_id).await?;
        }

        entity::prelude::Permission::delete_many()
            .filter(entity::permission::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::User::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}
