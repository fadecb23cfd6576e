//! CSRF state storage for the OAuth login flows.
//!
//! A state token is generated when a login URL is issued, stored in the session, and
//! compared against the `state` query parameter of the OAuth callback. Removal on
//! validation makes each token single-use.

use tower_sessions::Session;

use crate::error::{auth::AuthError, Error};

/// Session key for the member login CSRF token.
pub const SESSION_AUTH_CSRF_KEY: &str = "freyr:auth:csrf";
/// Session key for the corporation setup CSRF token.
pub const SESSION_SETUP_CSRF_KEY: &str = "freyr:setup:csrf";

/// CSRF token for the member login flow.
pub struct AuthLoginCsrf;

impl AuthLoginCsrf {
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, state.to_string())
            .await?;

        Ok(())
    }

    /// Removes and returns the stored token; single use.
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove(SESSION_AUTH_CSRF_KEY).await? {
            Some(csrf) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}

/// CSRF token for the corporation setup flow, kept under its own key so a
/// concurrent member login cannot consume it.
pub struct SetupLoginCsrf;

impl SetupLoginCsrf {
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_SETUP_CSRF_KEY, state.to_string())
            .await?;

        Ok(())
    }

    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove(SESSION_SETUP_CSRF_KEY).await? {
            Some(csrf) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
