use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000008_item_type::ItemType;

static IDX_ITEM_TYPE_MATERIAL_UNIQUE: &str = "idx-item_type_material-item_type_id-material_type_id";
static FK_ITEM_TYPE_MATERIAL_ITEM_TYPE_ID: &str = "fk-item_type_material-item_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemTypeMaterial::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemTypeMaterial::Id))
                    .col(integer(ItemTypeMaterial::ItemTypeId))
                    .col(big_integer(ItemTypeMaterial::MaterialTypeId))
                    .col(big_integer(ItemTypeMaterial::Quantity))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_TYPE_MATERIAL_UNIQUE)
                    .table(ItemTypeMaterial::Table)
                    .col(ItemTypeMaterial::ItemTypeId)
                    .col(ItemTypeMaterial::MaterialTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_TYPE_MATERIAL_ITEM_TYPE_ID)
                    .from_tbl(ItemTypeMaterial::Table)
                    .from_col(ItemTypeMaterial::ItemTypeId)
                    .to_tbl(ItemType::Table)
                    .to_col(ItemType::Id)
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
                    .name(FK_ITEM_TYPE_MATERIAL_ITEM_TYPE_ID)
                    .table(ItemTypeMaterial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_TYPE_MATERIAL_UNIQUE)
                    .table(ItemTypeMaterial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItemTypeMaterial::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ItemTypeMaterial {
    Table,
    Id,
    ItemTypeId,
    MaterialTypeId,
    Quantity,
}
