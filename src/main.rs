use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use freyr::{config::Config, model::app::AppState, router, scheduler::Scheduler, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let esi_client = startup::build_esi_client(&config).unwrap();
    let esi_fetcher = startup::build_esi_fetcher(&config).unwrap();
    let session = startup::connect_to_session(&config).await.unwrap();
    let db = startup::connect_to_database(&config).await.unwrap();

    let config = Arc::new(config);
    let job_storage = startup::start_workers(config.clone(), db.clone(), esi_fetcher.clone())
        .await
        .unwrap();

    Scheduler::new(db.clone(), job_storage.clone())
        .await
        .unwrap()
        .start()
        .await
        .unwrap();

    let router = router::routes()
        .with_state(AppState {
            db,
            esi_client,
            esi_fetcher,
            job_storage,
        })
        .layer(session);

    info!("Starting server on {}", config.listen_address);

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .unwrap();
    axum::serve(listener, router).await.unwrap();
}
