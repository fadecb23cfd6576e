use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_eve_corporation::EveCorporation,
    m20260115_000004_freyr_user_character::FreyrUserCharacter,
};

static IDX_BUYBACK_CORPORATION_SYNC_CHARACTER_ID: &str =
    "idx-buyback_corporation-sync_character_id";
static FK_BUYBACK_CORPORATION_CORPORATION_ID: &str = "fk-buyback_corporation-corporation_id";
static FK_BUYBACK_CORPORATION_SYNC_CHARACTER_ID: &str = "fk-buyback_corporation-sync_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BuybackCorporation::Table)
                    .if_not_exists()
                    .col(pk_auto(BuybackCorporation::Id))
                    .col(integer_uniq(BuybackCorporation::CorporationId))
                    .col(integer(BuybackCorporation::SyncCharacterId))
                    .col(text(BuybackCorporation::RefreshToken))
                    .col(small_integer(BuybackCorporation::SyncError))
                    .col(timestamp_null(BuybackCorporation::LastSyncedAt))
                    .col(timestamp(BuybackCorporation::CreatedAt))
                    .col(timestamp(BuybackCorporation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUYBACK_CORPORATION_SYNC_CHARACTER_ID)
                    .table(BuybackCorporation::Table)
                    .col(BuybackCorporation::SyncCharacterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUYBACK_CORPORATION_CORPORATION_ID)
                    .from_tbl(BuybackCorporation::Table)
                    .from_col(BuybackCorporation::CorporationId)
                    .to_tbl(EveCorporation::Table)
                    .to_col(EveCorporation::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUYBACK_CORPORATION_SYNC_CHARACTER_ID)
                    .from_tbl(BuybackCorporation::Table)
                    .from_col(BuybackCorporation::SyncCharacterId)
                    .to_tbl(FreyrUserCharacter::Table)
                    .to_col(FreyrUserCharacter::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUYBACK_CORPORATION_SYNC_CHARACTER_ID)
                    .table(BuybackCorporation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUYBACK_CORPORATION_CORPORATION_ID)
                    .table(BuybackCorporation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUYBACK_CORPORATION_SYNC_CHARACTER_ID)
                    .table(BuybackCorporation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BuybackCorporation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BuybackCorporation {
    Table,
    Id,
    CorporationId,
    SyncCharacterId,
    RefreshToken,
    SyncError,
    LastSyncedAt,
    CreatedAt,
    UpdatedAt,
}
