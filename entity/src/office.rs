use sea_orm::entity::prelude::*;

/// An office a corporation rents at a location.
///
/// `office_id` is the EVE Online item ID of the office asset and identifies
/// the office across synchronization runs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "office")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub office_id: i64,
    pub corporation_id: i32,
    pub location_id: i32,
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
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
    #[sea_orm(has_many = "super::program_location::Entity")]
    ProgramLocation,
}

impl Related<super::buyback_corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuybackCorporation.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::program_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgramLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
