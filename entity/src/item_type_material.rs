use sea_orm::entity::prelude::*;

/// Refining yield of an item type: `quantity` units of `material_type_id`
/// per portion of the parent item.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item_type_material")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_type_id: i32,
    pub material_type_id: i64,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item_type::Entity",
        from = "Column::ItemTypeId",
        to = "super::item_type::Column::Id"
    )]
    ItemType,
}

impl Related<super::item_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
