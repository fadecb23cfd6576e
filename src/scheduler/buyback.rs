use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;

use crate::{
    data::buyback::corporation::BuybackCorporationRepository, error::Error,
    model::worker::WorkerJob, worker,
};

/// Enqueues one office sync job per enrolled corporation.
pub async fn schedule_office_syncs(
    db: DatabaseConnection,
    mut storage: RedisStorage<WorkerJob>,
) -> Result<usize, Error> {
    let corporations = BuybackCorporationRepository::new(&db).get_all().await?;
    let count = corporations.len();

    for corporation in corporations {
        worker::enqueue(
            &mut storage,
            WorkerJob::SyncCorporationOffices {
                corporation_id: corporation.id,
            },
        )
        .await?;
    }

    Ok(count)
}

/// Enqueues the daily reference price refresh.
pub async fn schedule_market_price_refresh(
    _db: DatabaseConnection,
    mut storage: RedisStorage<WorkerJob>,
) -> Result<usize, Error> {
    worker::enqueue(&mut storage, WorkerJob::RefreshMarketPrices).await?;

    Ok(1)
}

/// Enqueues the daily item type import.
pub async fn schedule_item_type_import(
    _db: DatabaseConnection,
    mut storage: RedisStorage<WorkerJob>,
) -> Result<usize, Error> {
    worker::enqueue(&mut storage, WorkerJob::ImportItemTypes).await?;

    Ok(1)
}
