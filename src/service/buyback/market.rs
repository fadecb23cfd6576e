//! Reference market price refresh.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::buyback::market_price::MarketPriceRepository, error::Error, esi::EsiFetcher,
};

pub struct MarketService<'a> {
    db: &'a DatabaseConnection,
    esi_fetcher: &'a EsiFetcher,
}

impl<'a> MarketService<'a> {
    pub fn new(db: &'a DatabaseConnection, esi_fetcher: &'a EsiFetcher) -> Self {
        Self { db, esi_fetcher }
    }

    /// Replaces stored reference prices with the current ESI price listing.
    pub async fn refresh_prices(&self) -> Result<u64, Error> {
        let entries = self.esi_fetcher.get_market_prices().await?;

        let count = MarketPriceRepository::new(self.db)
            .upsert_many(entries)
            .await?;

        info!("Refreshed {} reference market price(s)", count);

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::{
        data::buyback::market_price::MarketPriceRepository,
        esi::model::MarketPriceEntry,
        service::buyback::market::MarketService,
        util::test::esi_fetcher,
    };

    /// The ESI listing lands in the market price table.
    #[tokio::test]
    async fn refresh_stores_price_listing() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_buyback_tables().build().await?;

        let entries = vec![
            MarketPriceEntry {
                type_id: 34,
                average_price: Some(5.0),
                adjusted_price: Some(4.8),
            },
            MarketPriceEntry {
                type_id: 35,
                average_price: Some(10.0),
                adjusted_price: None,
            },
        ];

        let _prices = test
            .server
            .mock("GET", "/markets/prices/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&entries).unwrap())
            .create();

        let fetcher = esi_fetcher(&test.server);
        let service = MarketService::new(&test.db, &fetcher);

        let count = service.refresh_prices().await.unwrap();

        assert_eq!(count, 2);
        let stored = MarketPriceRepository::new(&test.db)
            .get_by_type_id(34)
            .await?
            .unwrap();
        assert_eq!(stored.average_price, Some(5.0));

        Ok(())
    }
}
