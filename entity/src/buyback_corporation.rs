use sea_orm::entity::prelude::*;

/// A corporation enrolled in buyback programs.
///
/// Holds the ESI refresh token captured during setup and the error status of
/// the most recent office synchronization. `sync_error` uses the status codes
/// from `SyncStatus` in the server crate: 0 none, 1 invalid token, 2 expired
/// token, 5 ESI unavailable.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "buyback_corporation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub corporation_id: i32,
    pub sync_character_id: i32,
    pub refresh_token: String,
    pub sync_error: i16,
    pub last_synced_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_corporation::Entity",
        from = "Column::CorporationId",
        to = "super::eve_corporation::Column::Id"
    )]
    EveCorporation,
    #[sea_orm(
        belongs_to = "super::freyr_user_character::Entity",
        from = "Column::SyncCharacterId",
        to = "super::freyr_user_character::Column::Id"
    )]
    SyncCharacter,
    #[sea_orm(has_many = "super::office::Entity")]
    Office,
    #[sea_orm(has_many = "super::program::Entity")]
    Program,
}

impl Related<super::eve_corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCorporation.def()
    }
}

impl Related<super::office::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Office.def()
    }
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Program.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
