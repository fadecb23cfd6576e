use sea_orm_migration::{prelude::*, schema::*};

static IDX_ITEM_TYPE_NAME: &str = "idx-item_type-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemType::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemType::Id))
                    .col(big_integer_uniq(ItemType::TypeId))
                    .col(string(ItemType::Name))
                    .col(boolean(ItemType::Published))
                    .col(big_integer(ItemType::GroupId))
                    .col(big_integer(ItemType::CategoryId))
                    .col(integer(ItemType::PortionSize))
                    .col(double(ItemType::Volume))
                    .col(timestamp(ItemType::CreatedAt))
                    .col(timestamp(ItemType::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_TYPE_NAME)
                    .table(ItemType::Table)
                    .col(ItemType::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_TYPE_NAME)
                    .table(ItemType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItemType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ItemType {
    Table,
    Id,
    TypeId,
    Name,
    Published,
    GroupId,
    CategoryId,
    PortionSize,
    Volume,
    CreatedAt,
    UpdatedAt,
}
