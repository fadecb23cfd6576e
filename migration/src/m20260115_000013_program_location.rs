use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000007_office::Office, m20260115_000011_program::Program};

static IDX_PROGRAM_LOCATION_UNIQUE: &str = "idx-program_location-program_id-office_id";
static FK_PROGRAM_LOCATION_PROGRAM_ID: &str = "fk-program_location-program_id";
static FK_PROGRAM_LOCATION_OFFICE_ID: &str = "fk-program_location-office_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgramLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(ProgramLocation::Id))
                    .col(integer(ProgramLocation::ProgramId))
                    .col(integer(ProgramLocation::OfficeId))
                    .col(timestamp(ProgramLocation::CreatedAt))
                    .col(timestamp(ProgramLocation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROGRAM_LOCATION_UNIQUE)
                    .table(ProgramLocation::Table)
                    .col(ProgramLocation::ProgramId)
                    .col(ProgramLocation::OfficeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROGRAM_LOCATION_PROGRAM_ID)
                    .from_tbl(ProgramLocation::Table)
                    .from_col(ProgramLocation::ProgramId)
                    .to_tbl(Program::Table)
                    .to_col(Program::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROGRAM_LOCATION_OFFICE_ID)
                    .from_tbl(ProgramLocation::Table)
                    .from_col(ProgramLocation::OfficeId)
                    .to_tbl(Office::Table)
                    .to_col(Office::Id)
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
                    .name(FK_PROGRAM_LOCATION_OFFICE_ID)
                    .table(ProgramLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROGRAM_LOCATION_PROGRAM_ID)
                    .table(ProgramLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROGRAM_LOCATION_UNIQUE)
                    .table(ProgramLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProgramLocation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProgramLocation {
    Table,
    Id,
    ProgramId,
    OfficeId,
    CreatedAt,
    UpdatedAt,
}
