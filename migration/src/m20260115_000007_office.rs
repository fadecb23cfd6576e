use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000005_buyback_corporation::BuybackCorporation, m20260115_000006_location::Location,
};

static IDX_OFFICE_CORPORATION_ID: &str = "idx-office-corporation_id";
static FK_OFFICE_CORPORATION_ID: &str = "fk-office-corporation_id";
static FK_OFFICE_LOCATION_ID: &str = "fk-office-location_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Office::Table)
                    .if_not_exists()
                    .col(pk_auto(Office::Id))
                    .col(big_integer_uniq(Office::OfficeId))
                    .col(integer(Office::CorporationId))
                    .col(integer(Office::LocationId))
                    .col(timestamp(Office::CreatedAt))
                    .col(timestamp(Office::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OFFICE_CORPORATION_ID)
                    .table(Office::Table)
                    .col(Office::CorporationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OFFICE_CORPORATION_ID)
                    .from_tbl(Office::Table)
                    .from_col(Office::CorporationId)
                    .to_tbl(BuybackCorporation::Table)
                    .to_col(BuybackCorporation::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OFFICE_LOCATION_ID)
                    .from_tbl(Office::Table)
                    .from_col(Office::LocationId)
                    .to_tbl(Location::Table)
                    .to_col(Location::Id)
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
                    .name(FK_OFFICE_LOCATION_ID)
                    .table(Office::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OFFICE_CORPORATION_ID)
                    .table(Office::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OFFICE_CORPORATION_ID)
                    .table(Office::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Office::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Office {
    Table,
    Id,
    OfficeId,
    CorporationId,
    LocationId,
    CreatedAt,
    UpdatedAt,
}
