use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000002_eve_character::EveCharacter;

static IDX_FREYR_USER_MAIN_CHARACTER_ID: &str = "idx-freyr_user-main_character_id";
static FK_FREYR_USER_MAIN_CHARACTER_ID: &str = "fk-freyr_user-main_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FreyrUser::Table)
                    .if_not_exists()
                    .col(pk_auto(FreyrUser::Id))
                    .col(integer(FreyrUser::MainCharacterId))
                    .col(string_len(FreyrUser::Role, 16))
                    .col(timestamp(FreyrUser::CreatedAt))
                    .col(timestamp(FreyrUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FREYR_USER_MAIN_CHARACTER_ID)
                    .table(FreyrUser::Table)
                    .col(FreyrUser::MainCharacterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FREYR_USER_MAIN_CHARACTER_ID)
                    .from_tbl(FreyrUser::Table)
                    .from_col(FreyrUser::MainCharacterId)
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
                    .name(FK_FREYR_USER_MAIN_CHARACTER_ID)
                    .table(FreyrUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FREYR_USER_MAIN_CHARACTER_ID)
                    .table(FreyrUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FreyrUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FreyrUser {
    Table,
    Id,
    MainCharacterId,
    Role,
    CreatedAt,
    UpdatedAt,
}
