use std::sync::Arc;

use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::{
    config::Config, error::Error, esi::EsiFetcher, model::worker::WorkerJob, worker::handle_job,
};

/// Build and configure the ESI OAuth client with the provided credentials
pub fn build_esi_client(config: &Config) -> Result<eve_esi::Client, Error> {
    let esi_client = eve_esi::Client::builder()
        .user_agent(&config.user_agent())
        .client_id(&config.esi_client_id)
        .client_secret(&config.esi_client_secret)
        .callback_url(&config.esi_callback_url)
        .build()?;

    Ok(esi_client)
}

/// Build the typed client for ESI data endpoints (assets, locations, prices)
pub fn build_esi_fetcher(config: &Config) -> Result<EsiFetcher, Error> {
    let esi_fetcher = EsiFetcher::new(
        &config.user_agent(),
        &config.esi_client_id,
        &config.esi_client_secret,
    )?;

    Ok(esi_fetcher)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations.");

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = tower_sessions_redis_store::fred::prelude::Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Spawn the apalis worker pool and return the storage handle used to enqueue jobs
pub async fn start_workers(
    config: Arc<Config>,
    db: DatabaseConnection,
    esi_fetcher: EsiFetcher,
) -> Result<RedisStorage<WorkerJob>, Error> {
    use apalis::prelude::*;

    let conn = apalis_redis::connect(config.valkey_url.to_string()).await?;
    let storage = RedisStorage::new(conn);
    let workers = config.workers;

    let storage_clone = storage.clone();

    let _ = tokio::spawn(async move {
        WorkerBuilder::new("freyr-worker")
            .concurrency(workers)
            .data(db)
            .data(esi_fetcher)
            .data(config)
            .backend(storage_clone)
            .build_fn(handle_job)
            .run()
            .await;
    });

    Ok(storage)
}
