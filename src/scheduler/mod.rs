//! Cron scheduler for recurring buyback maintenance.
//!
//! Registers cron jobs that enqueue worker tasks at configured intervals:
//! the daily office sync for every enrolled corporation and the reference
//! data refreshes (market prices, item types).

use std::sync::Arc;

use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, error};

use crate::{error::Error, model::worker::WorkerJob};

pub mod buyback;
pub mod config;

use self::buyback::{
    schedule_item_type_import, schedule_market_price_refresh, schedule_office_syncs,
};
use self::config::buyback::{
    item_type as item_type_config, market_price as market_price_config, office as office_config,
};

/// Job scheduler for recurring buyback maintenance tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    storage: RedisStorage<WorkerJob>,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    pub async fn new(
        db: DatabaseConnection,
        storage: RedisStorage<WorkerJob>,
    ) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { db, storage, sched })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            office_config::CRON_EXPRESSION,
            "office sync",
            schedule_office_syncs,
        )
        .await?;

        self.schedule_job(
            market_price_config::CRON_EXPRESSION,
            "market price refresh",
            schedule_market_price_refresh,
        )
        .await?;

        self.schedule_job(
            item_type_config::CRON_EXPRESSION,
            "item type import",
            schedule_item_type_import,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The function receives clones of the database connection and worker
    /// storage and returns the number of worker jobs it enqueued.
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, RedisStorage<WorkerJob>) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let storage = self.storage.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let storage = storage.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db, storage).await {
                        Ok(count) => debug!("Scheduled {} {} job(s)", count, name),
                        Err(e) => error!("Error scheduling {} job(s): {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
