use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::session::{AuthLoginCsrf, SetupLoginCsrf},
};

/// Validate that the stored login CSRF state exists and matches `csrf_state`.
/// Returns `Ok(())` when valid or the appropriate `Error` otherwise.
pub async fn validate_login_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = AuthLoginCsrf::remove(session).await?;

    if stored_state == csrf_state {
        return Ok(());
    }

    Err(AuthError::CsrfValidationFailed.into())
}

/// Validate the corporation setup CSRF state, stored under its own key.
pub async fn validate_setup_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SetupLoginCsrf::remove(session).await?;

    if stored_state == csrf_state {
        return Ok(());
    }

    Err(AuthError::CsrfValidationFailed.into())
}

#[cfg(test)]
pub mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use freyr_test_utils::prelude::*;

    use crate::{
        controller::util::csrf::validate_login_csrf, model::session::AuthLoginCsrf,
    };

    /// Tests successful validation of CSRF state
    ///
    /// 200 success
    #[tokio::test]
    async fn validates_csrf_successfully() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let state = "state";

        AuthLoginCsrf::insert(&test.session, state).await.unwrap();
        let result = validate_login_csrf(&test.session, state).await;

        assert!(result.is_ok());

        Ok(())
    }

    /// Tests failed validation of CSRF state due to mismatch
    ///
    /// 400 bad request
    #[tokio::test]
    async fn fails_for_csrf_mismatch() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        AuthLoginCsrf::insert(&test.session, "different_state")
            .await
            .unwrap();
        let result = validate_login_csrf(&test.session, "state").await;

        assert!(result.is_err());
        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Tests failed validation of CSRF state due to session error
    ///
    /// 500 internal server error
    #[tokio::test]
    async fn fails_when_csrf_not_in_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = validate_login_csrf(&test.session, "state").await;

        assert!(result.is_err());
        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
