use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_season_table::Season;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Race::Table)
                    .if_not_exists()
                    .col(pk_auto(Race::Id))
                    .col(integer(Race::SeasonId))
                    .col(string(Race::Name))
                    .col(timestamp_with_time_zone_null(Race::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_season_id")
                            .from(Race::Table, Race::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_race_season_name_unique")
                            .col(Race::SeasonId)
                            .col(Race::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Race::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Race {
    Table,
    Id,
    SeasonId,
    Name,
    Date,
}
