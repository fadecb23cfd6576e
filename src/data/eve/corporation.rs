use chrono::Utc;
use eve_esi::model::corporation::Corporation;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CorporationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a corporation identity entry from an ESI corporation payload.
    pub async fn create(
        &self,
        corporation_id: i64,
        corporation: Corporation,
    ) -> Result<entity::eve_corporation::Model, DbErr> {
        let corporation = entity::eve_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(corporation.name),
            ticker: ActiveValue::Set(corporation.ticker),
            member_count: ActiveValue::Set(corporation.member_count),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        corporation.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::eve_corporation::Model>, DbErr> {
        entity::prelude::EveCorporation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds a corporation by its EVE Online corporation ID.
    pub async fn get_by_corporation_id(
        &self,
        corporation_id: i64,
    ) -> Result<Option<entity::eve_corporation::Model>, DbErr> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(self.db)
            .await
    }

}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::data::eve::corporation::CorporationRepository;

    /// Expect the inserted entry back when looking up by EVE corporation ID.
    #[tokio::test]
    async fn create_and_find_by_corporation_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let repo = CorporationRepository::new(&test.db);

        let created = repo.create(98_000_001, factory::corporation()).await?;

        let found = repo.get_by_corporation_id(98_000_001).await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().id, created.id);

        Ok(())
    }

    /// Expect None for a corporation that was never stored.
    #[tokio::test]
    async fn find_missing_corporation_returns_none() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let repo = CorporationRepository::new(&test.db);

        let found = repo.get_by_corporation_id(98_999_999).await?;

        assert!(found.is_none());

        Ok(())
    }
}
