use sea_orm::entity::prelude::*;

/// An in-game station or Upwell structure usable as a buyback drop-off point.
///
/// `category` mirrors the EVE inventory category of the location: 3 station,
/// 65 structure, 0 unknown.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub location_id: i64,
    pub name: String,
    pub solar_system_id: Option<i64>,
    pub category: i16,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::office::Entity")]
    Office,
}

impl Related<super::office::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Office.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
