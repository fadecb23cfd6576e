//! Error types for the Freyr server application.
//!
//! This module provides specialized error types for each domain (authentication,
//! configuration, office synchronization, form validation, worker queue). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic
//! error definitions.

pub mod auth;
pub mod config;
pub mod sync;
pub mod validate;
pub mod worker;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::{
    error::{
        auth::AuthError, config::ConfigError, sync::SyncError, validate::ValidateError,
        worker::WorkerError,
    },
    esi::FetchError,
    model::api::ErrorDto,
};

/// Main error type for the Freyr server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type, converted via `thiserror`'s `#[from]` with the `?` operator. The
/// `IntoResponse` implementation maps errors to HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, ownership, permission).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Office synchronization error (token invalid/expired, ESI unavailable).
    #[error(transparent)]
    SyncError(#[from] SyncError),
    /// Form validation error (brokerage bounds, malformed payloads).
    #[error(transparent)]
    ValidateError(#[from] ValidateError),
    /// Worker queue error (job serialization, scheduling).
    #[error(transparent)]
    WorkerError(#[from] WorkerError),
    /// Requested record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// ESI OAuth client error (login URL, token exchange, JWT validation).
    #[error(transparent)]
    EsiError(#[from] eve_esi::Error),
    /// ESI fetch error (assets, locations, reference data).
    #[error(transparent)]
    FetchError(#[from] FetchError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Valkey session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Valkey worker queue transport error.
    #[error(transparent)]
    ApalisRedisError(#[from] apalis_redis::RedisError),
    /// JSON serialization error (notification item blobs).
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::SyncError(err) => err.into_response(),
            Self::ValidateError(err) => err.into_response(),
            Self::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", what),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged; the client receives a generic message so internal
/// details never leak into API responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
