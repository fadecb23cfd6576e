//! Buyback domain services.

pub mod calculator;
pub mod corporation;
pub mod item_import;
pub mod market;
pub mod notification;
pub mod office_sync;
pub mod program;
pub mod setup;
pub mod stats;
