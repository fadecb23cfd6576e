use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Form-layer validation failures, rejected before anything reaches persistence.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("Brokerage must be between {min} and {max} percent, got {value}")]
    BrokerageOutOfRange { value: i32, min: i32, max: i32 },
    #[error("Program name must not be empty")]
    EmptyProgramName,
    #[error("Unknown buyback program")]
    UnknownProgram,
    #[error("Office does not belong to the program's corporation")]
    OfficeOutsideCorporation,
    #[error("Location does not belong to the selected program")]
    LocationOutsideProgram,
}

impl IntoResponse for ValidateError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
