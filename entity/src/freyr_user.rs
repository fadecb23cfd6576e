use sea_orm::entity::prelude::*;

/// Application role assigned to a user.
///
/// Managers hold program management and corporation setup rights; members
/// have basic access only.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "member")]
    Member,
    #[sea_orm(string_value = "manager")]
    Manager,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "freyr_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub main_character_id: i32,
    pub role: UserRole,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_character::Entity",
        from = "Column::MainCharacterId",
        to = "super::eve_character::Column::Id"
    )]
    MainCharacter,
    #[sea_orm(has_many = "super::freyr_user_character::Entity")]
    FreyrUserCharacter,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::freyr_user_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FreyrUserCharacter.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
