use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000002_eve_character::EveCharacter, m20260115_000011_program::Program};

static IDX_CONTRACT_PROGRAM_ID: &str = "idx-contract-program_id";
static IDX_CONTRACT_CHARACTER_ID: &str = "idx-contract-character_id";
static FK_CONTRACT_PROGRAM_ID: &str = "fk-contract-program_id";
static FK_CONTRACT_CHARACTER_ID: &str = "fk-contract-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contract::Table)
                    .if_not_exists()
                    .col(pk_auto(Contract::Id))
                    .col(big_integer_uniq(Contract::ContractId))
                    .col(integer_null(Contract::ProgramId))
                    .col(integer(Contract::CharacterId))
                    .col(double(Contract::Price))
                    .col(string(Contract::Status))
                    .col(timestamp(Contract::DateIssued))
                    .col(timestamp(Contract::CreatedAt))
                    .col(timestamp(Contract::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRACT_PROGRAM_ID)
                    .table(Contract::Table)
                    .col(Contract::ProgramId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRACT_CHARACTER_ID)
                    .table(Contract::Table)
                    .col(Contract::CharacterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTRACT_PROGRAM_ID)
                    .from_tbl(Contract::Table)
                    .from_col(Contract::ProgramId)
                    .to_tbl(Program::Table)
                    .to_col(Program::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTRACT_CHARACTER_ID)
                    .from_tbl(Contract::Table)
                    .from_col(Contract::CharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONTRACT_CHARACTER_ID)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONTRACT_PROGRAM_ID)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRACT_CHARACTER_ID)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRACT_PROGRAM_ID)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contract::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Contract {
    Table,
    Id,
    ContractId,
    ProgramId,
    CharacterId,
    Price,
    Status,
    DateIssued,
    CreatedAt,
    UpdatedAt,
}
