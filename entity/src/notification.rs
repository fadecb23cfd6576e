use sea_orm::entity::prelude::*;

/// A submitted buyback quote tied to a program location.
///
/// `items` is an immutable serialized JSON object mapping type IDs to
/// quantities, stored exactly as submitted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub program_location_id: i32,
    pub user_id: i32,
    pub total: f64,
    #[sea_orm(column_type = "Text")]
    pub items: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::program_location::Entity",
        from = "Column::ProgramLocationId",
        to = "super::program_location::Column::Id"
    )]
    ProgramLocation,
    #[sea_orm(
        belongs_to = "super::freyr_user::Entity",
        from = "Column::UserId",
        to = "super::freyr_user::Column::Id"
    )]
    FreyrUser,
}

impl Related<super::program_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgramLocation.def()
    }
}

impl Related<super::freyr_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FreyrUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
