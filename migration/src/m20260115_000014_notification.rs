use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000003_freyr_user::FreyrUser, m20260115_000013_program_location::ProgramLocation,
};

static IDX_NOTIFICATION_PROGRAM_LOCATION_ID: &str = "idx-notification-program_location_id";
static IDX_NOTIFICATION_USER_ID: &str = "idx-notification-user_id";
static FK_NOTIFICATION_PROGRAM_LOCATION_ID: &str = "fk-notification-program_location_id";
static FK_NOTIFICATION_USER_ID: &str = "fk-notification-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(integer(Notification::ProgramLocationId))
                    .col(integer(Notification::UserId))
                    .col(double(Notification::Total))
                    .col(text(Notification::Items))
                    .col(timestamp(Notification::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_PROGRAM_LOCATION_ID)
                    .table(Notification::Table)
                    .col(Notification::ProgramLocationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_USER_ID)
                    .table(Notification::Table)
                    .col(Notification::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTIFICATION_PROGRAM_LOCATION_ID)
                    .from_tbl(Notification::Table)
                    .from_col(Notification::ProgramLocationId)
                    .to_tbl(ProgramLocation::Table)
                    .to_col(ProgramLocation::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTIFICATION_USER_ID)
                    .from_tbl(Notification::Table)
                    .from_col(Notification::UserId)
                    .to_tbl(FreyrUser::Table)
                    .to_col(FreyrUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NOTIFICATION_USER_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NOTIFICATION_PROGRAM_LOCATION_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_USER_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_PROGRAM_LOCATION_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    ProgramLocationId,
    UserId,
    Total,
    Items,
    CreatedAt,
}
