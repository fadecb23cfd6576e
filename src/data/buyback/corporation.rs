use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::sync::SyncStatus;

pub struct BuybackCorporationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BuybackCorporationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Enrolls a corporation, or refreshes the sync character and token of an
    /// existing enrollment. Keyed by the corporation entry ID.
    pub async fn upsert(
        &self,
        corporation_id: i32,
        sync_character_id: i32,
        refresh_token: String,
    ) -> Result<entity::buyback_corporation::Model, DbErr> {
        let existing = entity::prelude::BuybackCorporation::find()
            .filter(entity::buyback_corporation::Column::CorporationId.eq(corporation_id))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            let mut corporation_am = existing.into_active_model();
            corporation_am.sync_character_id = ActiveValue::Set(sync_character_id);
            corporation_am.refresh_token = ActiveValue::Set(refresh_token);
            corporation_am.sync_error = ActiveValue::Set(SyncStatus::None.code());
            corporation_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

            return corporation_am.update(self.db).await;
        }

        let corporation = entity::buyback_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            sync_character_id: ActiveValue::Set(sync_character_id),
            refresh_token: ActiveValue::Set(refresh_token),
            sync_error: ActiveValue::Set(SyncStatus::None.code()),
            last_synced_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        corporation.insert(self.db).await
    }

    pub async fn get(
        &self,
        id: i32,
    ) -> Result<Option<entity::buyback_corporation::Model>, DbErr> {
        entity::prelude::BuybackCorporation::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::buyback_corporation::Model>, DbErr> {
        entity::prelude::BuybackCorporation::find().all(self.db).await
    }

    /// All enrollments together with their corporation identity entries.
    pub async fn get_all_with_corporation(
        &self,
    ) -> Result<
        Vec<(
            entity::buyback_corporation::Model,
            Option<entity::eve_corporation::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::BuybackCorporation::find()
            .find_also_related(entity::eve_corporation::Entity)
            .all(self.db)
            .await
    }

    /// Records the outcome of a sync run: a status code and, on success, the
    /// completion timestamp.
    pub async fn set_sync_result(
        &self,
        id: i32,
        status: SyncStatus,
        synced_at: Option<NaiveDateTime>,
    ) -> Result<(), DbErr> {
        let corporation = match entity::prelude::BuybackCorporation::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(corporation) => corporation,
            None => return Ok(()),
        };

        let mut corporation_am = corporation.into_active_model();
        corporation_am.sync_error = ActiveValue::Set(status.code());
        if let Some(synced_at) = synced_at {
            corporation_am.last_synced_at = ActiveValue::Set(Some(synced_at));
        }
        corporation_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        corporation_am.update(self.db).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::{
        data::buyback::corporation::BuybackCorporationRepository, model::sync::SyncStatus,
    };

    /// Enrolling the same corporation twice updates the existing row.
    #[tokio::test]
    async fn upsert_does_not_duplicate() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let enrolled = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;
        let repo = BuybackCorporationRepository::new(&test.db);

        let updated = repo
            .upsert(
                enrolled.corporation.id,
                enrolled.ownership.id,
                "second_token".to_string(),
            )
            .await?;

        assert_eq!(updated.id, enrolled.buyback_corporation.id);
        assert_eq!(updated.refresh_token, "second_token");
        assert_eq!(repo.get_all().await?.len(), 1);

        Ok(())
    }

    /// A recorded failure status is readable back and cleared on success.
    #[tokio::test]
    async fn sync_result_round_trips() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let enrolled = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;
        let repo = BuybackCorporationRepository::new(&test.db);

        repo.set_sync_result(
            enrolled.buyback_corporation.id,
            SyncStatus::TokenExpired,
            None,
        )
        .await?;

        let stored = repo.get(enrolled.buyback_corporation.id).await?.unwrap();
        assert_eq!(
            SyncStatus::from_code(stored.sync_error),
            SyncStatus::TokenExpired
        );
        assert!(stored.last_synced_at.is_none());

        repo.set_sync_result(
            enrolled.buyback_corporation.id,
            SyncStatus::None,
            Some(chrono::Utc::now().naive_utc()),
        )
        .await?;

        let stored = repo.get(enrolled.buyback_corporation.id).await?.unwrap();
        assert_eq!(SyncStatus::from_code(stored.sync_error), SyncStatus::None);
        assert!(stored.last_synced_at.is_some());

        Ok(())
    }
}
