use sea_orm::entity::prelude::*;

/// Cached identity of an EVE Online corporation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_corporation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub corporation_id: i64,
    pub name: String,
    pub ticker: String,
    pub member_count: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::buyback_corporation::Entity")]
    BuybackCorporation,
}

impl Related<super::buyback_corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuybackCorporation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
