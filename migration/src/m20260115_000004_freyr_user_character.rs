use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000002_eve_character::EveCharacter, m20260115_000003_freyr_user::FreyrUser,
};

static IDX_FREYR_USER_CHARACTER_USER_ID: &str = "idx-freyr_user_character-user_id";
static FK_FREYR_USER_CHARACTER_USER_ID: &str = "fk-freyr_user_character-user_id";
static FK_FREYR_USER_CHARACTER_CHARACTER_ID: &str = "fk-freyr_user_character-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FreyrUserCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(FreyrUserCharacter::Id))
                    .col(integer(FreyrUserCharacter::UserId))
                    .col(integer_uniq(FreyrUserCharacter::CharacterId))
                    .col(string(FreyrUserCharacter::OwnerHash))
                    .col(timestamp(FreyrUserCharacter::CreatedAt))
                    .col(timestamp(FreyrUserCharacter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FREYR_USER_CHARACTER_USER_ID)
                    .table(FreyrUserCharacter::Table)
                    .col(FreyrUserCharacter::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FREYR_USER_CHARACTER_USER_ID)
                    .from_tbl(FreyrUserCharacter::Table)
                    .from_col(FreyrUserCharacter::UserId)
                    .to_tbl(FreyrUser::Table)
                    .to_col(FreyrUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FREYR_USER_CHARACTER_CHARACTER_ID)
                    .from_tbl(FreyrUserCharacter::Table)
                    .from_col(FreyrUserCharacter::CharacterId)
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
                    .name(FK_FREYR_USER_CHARACTER_CHARACTER_ID)
                    .table(FreyrUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FREYR_USER_CHARACTER_USER_ID)
                    .table(FreyrUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FREYR_USER_CHARACTER_USER_ID)
                    .table(FreyrUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FreyrUserCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FreyrUserCharacter {
    Table,
    Id,
    UserId,
    CharacterId,
    OwnerHash,
    CreatedAt,
    UpdatedAt,
}
