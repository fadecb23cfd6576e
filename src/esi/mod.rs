//! Thin asynchronous client for the ESI endpoints the buyback domain needs.
//!
//! The `eve_esi` crate remains the OAuth front door (login URLs, code exchange, JWT
//! validation); this module covers the authenticated and paginated data endpoints on
//! top of that: corporation assets, structure/station lookups, item type metadata,
//! reference market prices, and the SSO refresh-token exchange used by background
//! office syncs.

pub mod client;
pub mod model;

pub use client::EsiFetcher;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("SSO rejected the refresh token: {0}")]
    TokenRejected(String),
    #[error("ESI rejected the access token (HTTP {0})")]
    Unauthorized(u16),
    #[error("ESI is currently unavailable (HTTP {0})")]
    Unavailable(u16),
    #[error("unexpected response from ESI (HTTP {status}): {body}")]
    UnexpectedStatus { status: u16, body: String },
}
