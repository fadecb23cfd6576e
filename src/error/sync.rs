//! Office synchronization error types.
//!
//! A sync run either completes in full or is abandoned; these errors describe why a run
//! was abandoned. Each variant maps to the status code recorded on the corporation row
//! so the failure can be surfaced to managers on their next view.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{esi::FetchError, model::api::ErrorDto, model::sync::SyncStatus};

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Invalid ESI token for corporation office sync")]
    TokenInvalid,
    #[error("Expired ESI token for corporation office sync")]
    TokenExpired,
    #[error("ESI API is currently unavailable")]
    EsiUnavailable,
}

impl SyncError {
    /// Status code stored on the corporation row for this failure.
    pub fn status(&self) -> SyncStatus {
        match self {
            Self::TokenInvalid => SyncStatus::TokenInvalid,
            Self::TokenExpired => SyncStatus::TokenExpired,
            Self::EsiUnavailable => SyncStatus::EsiUnavailable,
        }
    }

    /// Classifies a fetch failure into the corporation-level sync status.
    ///
    /// SSO rejecting the refresh token means the token was revoked or never had the
    /// required scopes; ESI rejecting the access token mid-run means it expired.
    /// Anything transport-shaped or 5xx counts as ESI being unavailable.
    pub fn from_fetch(err: FetchError) -> Self {
        match err {
            FetchError::TokenRejected(_) => Self::TokenInvalid,
            FetchError::Unauthorized(_) => Self::TokenExpired,
            FetchError::Unavailable(_) | FetchError::Http(_) => Self::EsiUnavailable,
            _ => Self::EsiUnavailable,
        }
    }
}

impl IntoResponse for SyncError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: self.status().message().to_string(),
            }),
        )
            .into_response()
    }
}
