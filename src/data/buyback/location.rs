use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        location_id: i64,
        name: String,
        solar_system_id: Option<i64>,
        category: i16,
    ) -> Result<entity::location::Model, DbErr> {
        let location = entity::location::ActiveModel {
            location_id: ActiveValue::Set(location_id),
            name: ActiveValue::Set(name),
            solar_system_id: ActiveValue::Set(solar_system_id),
            category: ActiveValue::Set(category),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        location.insert(self.db).await
    }

    /// Finds a location by its EVE Online location ID.
    pub async fn get_by_location_id(
        &self,
        location_id: i64,
    ) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::LocationId.eq(location_id))
            .one(self.db)
            .await
    }

    pub async fn get_many(&self, ids: &[i32]) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .filter(entity::location::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}
