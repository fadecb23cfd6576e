use std::collections::HashMap;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::esi::model::MarketPriceEntry;

pub struct MarketPriceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MarketPriceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts reference prices fetched from ESI, keyed by their EVE type ID.
    pub async fn upsert_many(&self, entries: Vec<MarketPriceEntry>) -> Result<u64, DbErr> {
        if entries.is_empty() {
            return Ok(0);
        }

        let count = entries.len() as u64;
        let prices = entries.into_iter().map(|entry| {
            entity::market_price::ActiveModel {
                type_id: ActiveValue::Set(entry.type_id),
                average_price: ActiveValue::Set(entry.average_price),
                adjusted_price: ActiveValue::Set(entry.adjusted_price),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            }
        });

        entity::prelude::MarketPrice::insert_many(prices)
            .on_conflict(
                OnConflict::column(entity::market_price::Column::TypeId)
                    .update_columns([
                        entity::market_price::Column::AveragePrice,
                        entity::market_price::Column::AdjustedPrice,
                        entity::market_price::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(count)
    }

    pub async fn get_by_type_id(
        &self,
        type_id: i64,
    ) -> Result<Option<entity::market_price::Model>, DbErr> {
        entity::prelude::MarketPrice::find()
            .filter(entity::market_price::Column::TypeId.eq(type_id))
            .one(self.db)
            .await
    }

    /// Average prices for the requested type IDs, keyed by type ID. Types
    /// without a stored price or without an average are absent from the map.
    pub async fn get_average_prices(
        &self,
        type_ids: &[i64],
    ) -> Result<HashMap<i64, f64>, DbErr> {
        if type_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let prices = entity::prelude::MarketPrice::find()
            .filter(entity::market_price::Column::TypeId.is_in(type_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(prices
            .into_iter()
            .filter_map(|price| price.average_price.map(|avg| (price.type_id, avg)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::{data::buyback::market_price::MarketPriceRepository, esi::model::MarketPriceEntry};

    fn entry(type_id: i64, average_price: Option<f64>) -> MarketPriceEntry {
        MarketPriceEntry {
            type_id,
            average_price,
            adjusted_price: average_price,
        }
    }

    /// Re-upserting the same type ID updates the stored price.
    #[tokio::test]
    async fn upsert_many_is_keyed_by_type_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let repo = MarketPriceRepository::new(&test.db);

        repo.upsert_many(vec![entry(34, Some(5.0))]).await?;
        repo.upsert_many(vec![entry(34, Some(6.5))]).await?;

        let stored = repo.get_by_type_id(34).await?.unwrap();

        assert_eq!(stored.average_price, Some(6.5));

        Ok(())
    }

    /// Types without an average price are left out of the price map.
    #[tokio::test]
    async fn average_price_map_skips_missing_averages() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let repo = MarketPriceRepository::new(&test.db);

        repo.upsert_many(vec![entry(34, Some(5.0)), entry(35, None)]).await?;

        let prices = repo.get_average_prices(&[34, 35, 36]).await?;

        assert_eq!(prices.len(), 1);
        assert_eq!(prices.get(&34), Some(&5.0));

        Ok(())
    }
}
