use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;

use crate::{esi::EsiFetcher, model::worker::WorkerJob};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub esi_client: eve_esi::Client,
    pub esi_fetcher: EsiFetcher,
    pub job_storage: RedisStorage<WorkerJob>,
}
