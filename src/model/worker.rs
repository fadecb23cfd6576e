//! Worker job definitions for background task processing.
//!
//! Jobs are serialized to JSON for Redis storage and deserialized by worker handlers
//! for processing. Each variant carries the minimal data needed to perform the task.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Background job types for buyback data maintenance.
///
/// The scheduler and controllers enqueue these to the Redis-backed worker queue;
/// `worker::handle_job` dispatches them to the matching service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WorkerJob {
    /// Reconcile a corporation's offices against its current ESI asset list.
    ///
    /// # Fields
    /// - `corporation_id` - Database ID of the enrolled corporation to sync
    SyncCorporationOffices {
        /// Database ID of the enrolled corporation to sync.
        corporation_id: i32,
    },

    /// Import item types (and refining materials for ore) for the categories
    /// accepted by buyback programs.
    ImportItemTypes,

    /// Refresh reference market prices from ESI for all known item types.
    RefreshMarketPrices,
}

impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
