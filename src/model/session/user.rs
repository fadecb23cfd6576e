use tower_sessions::Session;

use crate::error::Error;

/// Session key for the logged in user's database ID.
pub const SESSION_USER_ID_KEY: &str = "freyr:auth:user_id";

/// Session wrapper for the logged in user's ID.
pub struct SessionUserId;

impl SessionUserId {
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.insert(SESSION_USER_ID_KEY, user_id).await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session.get(SESSION_USER_ID_KEY).await?)
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::model::session::SessionUserId;

    #[tokio::test]
    async fn inserted_user_id_is_retrievable() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        SessionUserId::insert(&test.session, 7).await.unwrap();

        let result = SessionUserId::get(&test.session).await.unwrap();

        assert_eq!(result, Some(7));

        Ok(())
    }

    #[tokio::test]
    async fn empty_session_yields_none() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = SessionUserId::get(&test.session).await.unwrap();

        assert_eq!(result, None);

        Ok(())
    }
}
