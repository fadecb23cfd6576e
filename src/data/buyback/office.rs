use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct OfficeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OfficeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts an office keyed by its in-game office (asset item) ID.
    pub async fn upsert(
        &self,
        office_id: i64,
        corporation_id: i32,
        location_id: i32,
    ) -> Result<entity::office::Model, DbErr> {
        let office = entity::office::ActiveModel {
            office_id: ActiveValue::Set(office_id),
            corporation_id: ActiveValue::Set(corporation_id),
            location_id: ActiveValue::Set(location_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::Office::insert(office)
            .on_conflict(
                OnConflict::column(entity::office::Column::OfficeId)
                    .update_columns([
                        entity::office::Column::CorporationId,
                        entity::office::Column::LocationId,
                        entity::office::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::office::Model>, DbErr> {
        entity::prelude::Office::find_by_id(id).one(self.db).await
    }

    /// All (entry ID, office ID) pairs stored for a corporation.
    pub async fn get_office_ids_by_corporation(
        &self,
        corporation_id: i32,
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Office::find()
            .select_only()
            .column(entity::office::Column::Id)
            .column(entity::office::Column::OfficeId)
            .filter(entity::office::Column::CorporationId.eq(corporation_id))
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    /// Offices of a corporation together with their resolved locations.
    pub async fn get_many_by_corporation(
        &self,
        corporation_id: i32,
    ) -> Result<Vec<(entity::office::Model, Option<entity::location::Model>)>, DbErr> {
        entity::prelude::Office::find()
            .filter(entity::office::Column::CorporationId.eq(corporation_id))
            .find_also_related(entity::location::Entity)
            .all(self.db)
            .await
    }

    /// Deletes a corporation's offices by their in-game office IDs. Returns the
    /// number of rows removed.
    pub async fn delete_by_office_ids(
        &self,
        corporation_id: i32,
        office_ids: &[i64],
    ) -> Result<u64, DbErr> {
        if office_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Office::delete_many()
            .filter(entity::office::Column::CorporationId.eq(corporation_id))
            .filter(entity::office::Column::OfficeId.is_in(office_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::{constant::LOCATION_CATEGORY_STATION, data::buyback::office::OfficeRepository};

    /// Upserting the same office ID twice keeps a single row and updates it.
    #[tokio::test]
    async fn upsert_is_keyed_by_office_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let enrolled = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;
        let first_location = test
            .insert_location(60_000_004, "Jita IV - Moon 4", LOCATION_CATEGORY_STATION)
            .await?;
        let second_location = test
            .insert_location(60_000_007, "Perimeter II", LOCATION_CATEGORY_STATION)
            .await?;
        let repo = OfficeRepository::new(&test.db);

        let created = repo
            .upsert(5_001, enrolled.buyback_corporation.id, first_location.id)
            .await?;
        let updated = repo
            .upsert(5_001, enrolled.buyback_corporation.id, second_location.id)
            .await?;

        assert_eq!(created.id, updated.id);
        assert_eq!(updated.location_id, second_location.id);
        assert_eq!(
            repo.get_office_ids_by_corporation(enrolled.buyback_corporation.id)
                .await?
                .len(),
            1
        );

        Ok(())
    }

    /// Deleting by office IDs only touches the targeted corporation's rows.
    #[tokio::test]
    async fn delete_by_office_ids_scoped_to_corporation() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let first = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;
        let second = test.insert_enrolled_corporation(98_000_002, 95_000_002).await?;
        let location = test
            .insert_location(60_000_004, "Jita IV - Moon 4", LOCATION_CATEGORY_STATION)
            .await?;
        let repo = OfficeRepository::new(&test.db);

        repo.upsert(5_001, first.buyback_corporation.id, location.id).await?;
        repo.upsert(5_002, second.buyback_corporation.id, location.id).await?;

        let removed = repo
            .delete_by_office_ids(first.buyback_corporation.id, &[5_001, 5_002])
            .await?;

        assert_eq!(removed, 1);
        assert_eq!(
            repo.get_office_ids_by_corporation(second.buyback_corporation.id)
                .await?
                .len(),
            1
        );

        Ok(())
    }
}
