use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(big_integer_uniq(Location::LocationId))
                    .col(string(Location::Name))
                    .col(big_integer_null(Location::SolarSystemId))
                    .col(small_integer(Location::Category))
                    .col(timestamp(Location::CreatedAt))
                    .col(timestamp(Location::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    LocationId,
    Name,
    SolarSystemId,
    Category,
    CreatedAt,
    UpdatedAt,
}
