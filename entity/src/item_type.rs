use sea_orm::entity::prelude::*;

/// An EVE Online item type accepted by buyback programs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub type_id: i64,
    pub name: String,
    pub published: bool,
    pub group_id: i64,
    pub category_id: i64,
    pub portion_size: i32,
    pub volume: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_type_material::Entity")]
    ItemTypeMaterial,
    #[sea_orm(has_many = "super::program_item::Entity")]
    ProgramItem,
}

impl Related<super::item_type_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemTypeMaterial.def()
    }
}

impl Related<super::program_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgramItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
