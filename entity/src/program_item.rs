use sea_orm::entity::prelude::*;

/// An item type accepted by a program, with its brokerage percentage.
///
/// Unique per (program, item type); re-adding an item updates the existing
/// row instead of duplicating it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "program_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub program_id: i32,
    pub item_type_id: i32,
    pub brokerage: i32,
    pub use_refined_value: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::program::Entity",
        from = "Column::ProgramId",
        to = "super::program::Column::Id"
    )]
    Program,
    #[sea_orm(
        belongs_to = "super::item_type::Entity",
        from = "Column::ItemTypeId",
        to = "super::item_type::Column::Id"
    )]
    ItemType,
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Program.def()
    }
}

impl Related<super::item_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
