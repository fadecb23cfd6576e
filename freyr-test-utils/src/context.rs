//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{TEST_CALLBACK_URL, TEST_ESI_CLIENT_ID, TEST_ESI_CLIENT_SECRET, TEST_USER_AGENT},
    error::TestError,
};

/// A fully initialized test environment.
///
/// Holds an in-memory SQLite database, a mockito server standing in for ESI
/// and the EVE SSO, an `eve_esi` client pointed at that server, and a
/// memory-backed session. Fixture helpers live in [`crate::fixtures`].
pub struct TestContext {
    /// Connection to the in-memory SQLite database.
    pub db: DatabaseConnection,
    /// ESI OAuth client configured against the mock server.
    pub esi_client: eve_esi::Client,
    /// Session backed by an in-memory store.
    pub session: Session,
    /// Mock HTTP server; tests add further endpoints directly.
    pub server: ServerGuard,

    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let esi_config = eve_esi::Config::builder()
            .esi_url(&mock_server_url)
            .token_url(&format!("{}/v2/oauth/token", mock_server_url))
            .jwk_url(&format!("{}/oauth/jwks", mock_server_url))
            .build()?;

        let esi_client = eve_esi::Client::builder()
            .config(esi_config)
            .user_agent(TEST_USER_AGENT)
            .client_id(TEST_ESI_CLIENT_ID)
            .client_secret(TEST_ESI_CLIENT_SECRET)
            .callback_url(TEST_CALLBACK_URL)
            .build()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            esi_client,
            session,
            server: mock_server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints registered through the builder were called
    /// as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
