use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000001_create_user_table::User, m20250301_000002_create_season_table::Season};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Permission::Table)
                    .if_not_exists()
                    .col(pk_auto(Permission::Id))
                    .col(integer(Permission::UserId))
                    .col(integer(Permission::SeasonId))
                    .col(string(Permission::PermissionType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_permission_user_id")
                            .from(Permission::Table, Permission::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_permission_season_id")
                            .from(Permission::Table, Permission::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_permission_user_season_unique")
                            .col(Permission::UserId)
                            .col(Permission::SeasonId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Permission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Permission {
    Table,
    Id,
    UserId,
    SeasonId,
    PermissionType,
}
