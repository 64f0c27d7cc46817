use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000002_create_season_table::Season, m20250301_000004_create_team_table::Team};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(integer(Driver::SeasonId))
                    .col(integer_null(Driver::ActualTeamId))
                    .col(string(Driver::Name))
                    .col(integer(Driver::Number))
                    .col(string_len_null(Driver::Nationality, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_season_id")
                            .from(Driver::Table, Driver::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_actual_team_id")
                            .from(Driver::Table, Driver::ActualTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_driver_season_name_unique")
                            .col(Driver::SeasonId)
                            .col(Driver::Name),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_driver_season_number_unique")
                            .col(Driver::SeasonId)
                            .col(Driver::Number),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    SeasonId,
    ActualTeamId,
    Name,
    Number,
    Nationality,
}
