use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

/// Worker queue error type.
///
/// These errors occur while enqueueing jobs and are treated as internal server
/// errors since they indicate issues with the background job system rather
/// than client errors.
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Failed to schedule task: {0}")]
    Scheduler(String),
}

impl IntoResponse for WorkerError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
