use entity::freyr_user::UserRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;
use tracing::warn;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::session::SessionUserId,
};

/// Resolves the session to its user entry.
///
/// # Returns
/// - `Ok(Model)`: The logged in user
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: Session points at a
///   deleted user; the session is cleared so the next request starts clean
pub async fn require_user(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<entity::freyr_user::Model, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserRepository::new(db).get(user_id).await? else {
        session.clear().await;

        warn!(
            "Failed to find user ID {} in database despite having an active session; \
            cleared session, they will need to log in again",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}

/// Resolves the session to its user and requires the manager role.
pub async fn require_manager(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<entity::freyr_user::Model, Error> {
    let user = require_user(db, session).await?;

    if user.role != UserRole::Manager {
        return Err(AuthError::ManagerRequired.into());
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use freyr_test_utils::prelude::*;

    use crate::{
        controller::util::guard::{require_manager, require_user},
        model::session::SessionUserId,
    };

    /// A session bound to an existing user resolves to that user.
    #[tokio::test]
    async fn resolves_user_from_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_user_with_character(95_000_001).await?;

        SessionUserId::insert(&test.session, fixture.user.id).await.unwrap();

        let user = require_user(&test.db, &test.session).await;

        assert!(user.is_ok());
        assert_eq!(user.unwrap().id, fixture.user.id);

        Ok(())
    }

    /// An anonymous session is answered with a not-found response.
    #[tokio::test]
    async fn anonymous_session_is_rejected() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;

        let result = require_user(&test.db, &test.session).await;

        assert!(result.is_err());
        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Members are turned away from manager-only endpoints.
    #[tokio::test]
    async fn member_fails_manager_guard() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_user_with_character(95_000_001).await?;

        SessionUserId::insert(&test.session, fixture.user.id).await.unwrap();

        let result = require_manager(&test.db, &test.session).await;

        assert!(result.is_err());
        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Managers pass the manager guard.
    #[tokio::test]
    async fn manager_passes_manager_guard() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let enrolled = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;

        SessionUserId::insert(&test.session, enrolled.user.id).await.unwrap();

        let result = require_manager(&test.db, &test.session).await;

        assert!(result.is_ok());

        Ok(())
    }
}
