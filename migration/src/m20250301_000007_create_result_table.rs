use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_team_table::Team, m20250301_000005_create_driver_table::Driver,
    m20250301_000006_create_race_table::Race,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RaceResult::Table)
                    .if_not_exists()
                    .col(pk_auto(RaceResult::Id))
                    .col(integer(RaceResult::DriverId))
                    .col(integer(RaceResult::TeamId))
                    .col(integer(RaceResult::RaceId))
                    .col(string(RaceResult::ResultType))
                    .col(integer_null(RaceResult::Position))
                    .col(double(RaceResult::Point).default(0.0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_driver_id")
                            .from(RaceResult::Table, RaceResult::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_team_id")
                            .from(RaceResult::Table, RaceResult::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_result_race_id")
                            .from(RaceResult::Table, RaceResult::RaceId)
                            .to(Race::Table, Race::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_result_driver_race_unique")
                            .col(RaceResult::DriverId)
                            .col(RaceResult::RaceId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RaceResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RaceResult {
    #[sea_orm(iden = "result")]
    Table,
    Id,
    DriverId,
    TeamId,
    RaceId,
    ResultType,
    Position,
    Point,
}
