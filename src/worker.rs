//! Background job processing.
//!
//! Jobs are pulled from the Redis-backed apalis queue and dispatched to the
//! matching buyback service. A failed job logs its error and is surfaced
//! through apalis; there is no retry machinery, the next scheduler tick or a
//! manual trigger runs the work again.

use std::sync::Arc;

use apalis::prelude::Data;
use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;
use tracing::{debug, error};

use crate::{
    config::Config,
    error::{worker::WorkerError, Error},
    esi::EsiFetcher,
    model::worker::WorkerJob,
    service::buyback::{
        item_import::ItemImportService, market::MarketService, office_sync::OfficeSyncService,
    },
};

pub async fn handle_job(
    job: WorkerJob,
    db: Data<DatabaseConnection>,
    esi_fetcher: Data<EsiFetcher>,
    config: Data<Arc<Config>>,
) -> Result<(), Error> {
    debug!("Processing job: {}", job);

    match job {
        WorkerJob::SyncCorporationOffices { corporation_id } => {
            OfficeSyncService::new(&db, &esi_fetcher)
                .sync_corporation(corporation_id)
                .await
                .map_err(|e| {
                    error!(
                        "Failed to sync offices for corporation {}: {:?}",
                        corporation_id, e
                    );
                    e
                })?;
        }
        WorkerJob::ImportItemTypes => {
            ItemImportService::new(&db, &esi_fetcher, &config.sde_type_materials_url)
                .run()
                .await
                .map_err(|e| {
                    error!("Failed to import item types: {:?}", e);
                    e
                })?;
        }
        WorkerJob::RefreshMarketPrices => {
            MarketService::new(&db, &esi_fetcher)
                .refresh_prices()
                .await
                .map_err(|e| {
                    error!("Failed to refresh market prices: {:?}", e);
                    e
                })?;
        }
    }

    Ok(())
}

/// Enqueues a job onto the Redis-backed worker queue.
pub async fn enqueue(
    storage: &mut RedisStorage<WorkerJob>,
    job: WorkerJob,
) -> Result<(), Error> {
    use apalis::prelude::Storage;

    debug!("Enqueueing job: {}", job);

    storage
        .push(job)
        .await
        .map_err(|e| WorkerError::Scheduler(e.to_string()))?;

    Ok(())
}
