use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::{error::InternalServerError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User lacks the manager role required for this action")]
    ManagerRequired,
    #[error("Character {0:?} is not owned by the logged in user")]
    CharacterNotOwned(String),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state present in session store but without a value")]
    CsrfMissingValue,
    #[error("OAuth token response did not include a refresh token")]
    RefreshTokenMissing,
}

impl AuthError {
    fn user_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                debug!("{}", Self::UserNotInSession);

                Self::user_not_found()
            }
            Self::UserNotInDatabase(user_id) => {
                debug!(user_id = %user_id, "{}", self);

                Self::user_not_found()
            }
            Self::ManagerRequired => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action.".to_string(),
                }),
            )
                .into_response(),
            Self::CharacterNotOwned(character_name) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!(
                        "You can only use your main or alt characters to add corporations. \
                        However, character {} is neither.",
                        character_name
                    ),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => {
                debug!("{}", Self::CsrfValidationFailed);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfMissingValue | Self::RefreshTokenMissing => {
                InternalServerError(self).into_response()
            }
        }
    }
}
