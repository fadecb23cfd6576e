//! Helpers shared by in-crate tests.

use mockito::ServerGuard;

use crate::esi::EsiFetcher;

/// An [`EsiFetcher`] whose ESI and SSO base URLs point at the mock server.
pub fn esi_fetcher(server: &ServerGuard) -> EsiFetcher {
    EsiFetcher::new("freyr-tests", "esi_client_id", "esi_client_secret")
        .unwrap()
        .with_base_urls(&server.url(), &format!("{}/v2/oauth/token", server.url()))
        .unwrap()
}
