use sea_orm::entity::prelude::*;

/// A named buyback ruleset owned by a corporation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "program")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub corporation_id: i32,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::buyback_corporation::Entity",
        from = "Column::CorporationId",
        to = "super::buyback_corporation::Column::Id"
    )]
    BuybackCorporation,
    #[sea_orm(has_many = "super::program_item::Entity")]
    ProgramItem,
    #[sea_orm(has_many = "super::program_location::Entity")]
    ProgramLocation,
}

impl Related<super::buyback_corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuybackCorporation.def()
    }
}

impl Related<super::program_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgramItem.def()
    }
}

impl Related<super::program_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgramLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
