use sea_orm::entity::prelude::*;

/// Cached identity of an EVE Online character.
///
/// `corporation_id` is the character's current EVE Online corporation ID, not
/// a foreign key; characters may belong to corporations Freyr never tracks.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub character_id: i64,
    pub name: String,
    pub corporation_id: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::freyr_user_character::Entity")]
    FreyrUserCharacter,
}

impl Related<super::freyr_user_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FreyrUserCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
