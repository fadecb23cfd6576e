//! Service layer for business logic and orchestration.
//!
//! Services coordinate between repositories and the ESI API and implement the
//! multi-step operations behind the HTTP surface: authentication, identity
//! caching, and the buyback domain (office sync, pricing, programs,
//! notifications, stats, reference data).

pub mod auth;
pub mod buyback;
pub mod eve;
pub mod user;
