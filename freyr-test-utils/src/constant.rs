//! Placeholder ESI client configuration shared by all tests.

/// User agent string for test ESI client requests.
pub static TEST_USER_AGENT: &str =
    "freyr/0.1.0 (contact@example.com; +https://github.com/autumn-order/freyr)";

/// Mock ESI OAuth2 client ID; not a real credential.
pub static TEST_ESI_CLIENT_ID: &str = "esi_client_id";

/// Mock ESI OAuth2 client secret; not a real credential.
pub static TEST_ESI_CLIENT_SECRET: &str = "esi_client_secret";

/// OAuth2 callback URL used in test login flows.
pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";
