use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000005_buyback_corporation::BuybackCorporation;

static IDX_PROGRAM_CORPORATION_ID: &str = "idx-program-corporation_id";
static FK_PROGRAM_CORPORATION_ID: &str = "fk-program-corporation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Program::Table)
                    .if_not_exists()
                    .col(pk_auto(Program::Id))
                    .col(integer(Program::CorporationId))
                    .col(string(Program::Name))
                    .col(timestamp(Program::CreatedAt))
                    .col(timestamp(Program::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROGRAM_CORPORATION_ID)
                    .table(Program::Table)
                    .col(Program::CorporationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROGRAM_CORPORATION_ID)
                    .from_tbl(Program::Table)
                    .from_col(Program::CorporationId)
                    .to_tbl(BuybackCorporation::Table)
                    .to_col(BuybackCorporation::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROGRAM_CORPORATION_ID)
                    .table(Program::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROGRAM_CORPORATION_ID)
                    .table(Program::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Program::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Program {
    Table,
    Id,
    CorporationId,
    Name,
    CreatedAt,
    UpdatedAt,
}
