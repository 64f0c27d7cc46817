//! Season permission repository.
//!
//! Provides lookups for the permission evaluator and the mutations behind
//! moderator management and admin promotion.

use entity::permission::PermissionType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::permission::SeasonPermission;

pub struct PermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the permission type a user holds on a season, if any.
    ///
    /// # Arguments
    /// - `user_id` - User to look up
    /// - `season_id` - Season to look up
    ///
    /// # Returns
    /// - `Ok(Some(PermissionType))` - The user's role on the season
    /// - `Ok(None)` - The user has no permission on the season
    /// - `Err(DbErr)` - Database error
    pub async fn get_type(
        &self,
        user_id: i32,
        season_id: i32,
    ) -> Result<Option<PermissionType>, DbErr> {
        let permission = entity::prelude::Permission::find()
            .filter(entity::permission::Column::UserId.eq(user_id))
            .filter(entity::permission::Column::SeasonId.eq(season_id))
            .one(self.db)
            .await?;

        Ok(permission.map(|p| p.permission_type))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SeasonPermission>, DbErr> {
        let permission = entity::prelude::Permission::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        permission.map(with_user).transpose()
    }

    /// Gets all permissions of a season, admin first, then by grant order.
    pub async fn get_by_season(&self, season_id: i32) -> Result<Vec<SeasonPermission>, DbErr> {
        let permissions = entity::prelude::Permission::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::permission::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::permission::Column::Id)
            .all(self.db)
            .await?;

        let mut permissions = permissions
            .into_iter()
            .map(with_user)
            .collect::<Result<Vec<_>, _>>()?;
        permissions.sort_by_key(|p| !p.is_admin());

        Ok(permissions)
    }

    pub async fn create(
        &self,
        user_id: i32,
        season_id: i32,
        permission_type: PermissionType,
    ) -> Result<SeasonPermission, DbErr> {
        let permission = entity::permission::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            season_id: ActiveValue::Set(season_id),
            permission_type: ActiveValue::Set(permission_type),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(permission.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Permission with id {} not found after creation",
                permission.id
            )))
    }

    /// Makes the given permission the season's Admin.
    ///
    /// Every current Admin of the season is demoted to Moderator first, inside the
    /// same transaction, so the season keeps exactly one Admin.
    pub async fn promote(&self, id: i32) -> Result<SeasonPermission, DbErr> {
        let txn = self.db.begin().await?;

        let permission = entity::prelude::Permission::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Permission with id {} not found",
                id
            )))?;

        let admins = entity::prelude::Permission::find()
            .filter(entity::permission::Column::SeasonId.eq(permission.season_id))
            .filter(entity::permission::Column::PermissionType.eq(PermissionType::Admin))
            .all(&txn)
            .await?;

        for admin in admins {
            let mut active_model: entity::permission::ActiveModel = admin.into();
            active_model.permission_type = ActiveValue::Set(PermissionType::Moderator);
            active_model.update(&txn).await?;
        }

        let mut active_model: entity::permission::ActiveModel = permission.into();
        active_model.permission_type = ActiveValue::Set(PermissionType::Admin);
        active_model.update(&txn).await?;

        txn.commit().await?;

        self.get_by_id(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Permission with id {} not found after promotion",
                id
            )))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Permission::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

fn with_user(
    (permission, user): (entity::permission::Model, Option<entity::user::Model>),
) -> Result<SeasonPermission, DbErr> {
    let user = user.ok_or(DbErr::RecordNotFound(format!(
        "User {} of permission {} not found",
        permission.user_id, permission.id
    )))?;

    Ok(SeasonPermission::from_entity(permission, user))
}
