use sea_orm::entity::prelude::*;

/// Ownership link between a Freyr user and an EVE Online character.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "freyr_user_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub character_id: i32,
    pub owner_hash: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::freyr_user::Entity",
        from = "Column::UserId",
        to = "super::freyr_user::Column::Id"
    )]
    FreyrUser,
    #[sea_orm(
        belongs_to = "super::eve_character::Entity",
        from = "Column::CharacterId",
        to = "super::eve_character::Column::Id"
    )]
    EveCharacter,
}

impl Related<super::freyr_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FreyrUser.def()
    }
}

impl Related<super::eve_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
