use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000008_item_type::ItemType, m20260115_000011_program::Program};

static IDX_PROGRAM_ITEM_UNIQUE: &str = "idx-program_item-program_id-item_type_id";
static FK_PROGRAM_ITEM_PROGRAM_ID: &str = "fk-program_item-program_id";
static FK_PROGRAM_ITEM_ITEM_TYPE_ID: &str = "fk-program_item-item_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgramItem::Table)
                    .if_not_exists()
                    .col(pk_auto(ProgramItem::Id))
                    .col(integer(ProgramItem::ProgramId))
                    .col(integer(ProgramItem::ItemTypeId))
                    .col(integer(ProgramItem::Brokerage))
                    .col(boolean(ProgramItem::UseRefinedValue))
                    .col(timestamp(ProgramItem::CreatedAt))
                    .col(timestamp(ProgramItem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROGRAM_ITEM_UNIQUE)
                    .table(ProgramItem::Table)
                    .col(ProgramItem::ProgramId)
                    .col(ProgramItem::ItemTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROGRAM_ITEM_PROGRAM_ID)
                    .from_tbl(ProgramItem::Table)
                    .from_col(ProgramItem::ProgramId)
                    .to_tbl(Program::Table)
                    .to_col(Program::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROGRAM_ITEM_ITEM_TYPE_ID)
                    .from_tbl(ProgramItem::Table)
                    .from_col(ProgramItem::ItemTypeId)
                    .to_tbl(ItemType::Table)
                    .to_col(ItemType::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROGRAM_ITEM_ITEM_TYPE_ID)
                    .table(ProgramItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROGRAM_ITEM_PROGRAM_ID)
                    .table(ProgramItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROGRAM_ITEM_UNIQUE)
                    .table(ProgramItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProgramItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProgramItem {
    Table,
    Id,
    ProgramId,
    ItemTypeId,
    Brokerage,
    UseRefinedValue,
    CreatedAt,
    UpdatedAt,
}
