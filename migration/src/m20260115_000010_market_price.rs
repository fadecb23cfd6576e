use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketPrice::Table)
                    .if_not_exists()
                    .col(pk_auto(MarketPrice::Id))
                    .col(big_integer_uniq(MarketPrice::TypeId))
                    .col(double_null(MarketPrice::AveragePrice))
                    .col(double_null(MarketPrice::AdjustedPrice))
                    .col(timestamp(MarketPrice::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MarketPrice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MarketPrice {
    Table,
    Id,
    TypeId,
    AveragePrice,
    AdjustedPrice,
    UpdatedAt,
}
