use std::collections::HashMap;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::esi::{
    model::{
        AccessToken, Asset, Category, Group, MarketPriceEntry, SsoError, Station, Structure,
        TypeInfo, TypeMaterials,
    },
    FetchError,
};

const DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest/";
const DEFAULT_TOKEN_URL: &str = "https://login.eveonline.com/v2/oauth/token";

/// Typed HTTP client for the ESI data endpoints Freyr consumes.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct EsiFetcher {
    http: Client,
    esi_url: Url,
    token_url: Url,
    client_id: String,
    client_secret: String,
}

impl EsiFetcher {
    pub fn new(
        user_agent: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Self, FetchError> {
        let http = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http,
            esi_url: Url::parse(DEFAULT_ESI_URL)?,
            token_url: Url::parse(DEFAULT_TOKEN_URL)?,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        })
    }

    /// Points the client at alternate base URLs; used by tests to target a mock server.
    pub fn with_base_urls(mut self, esi_url: &str, token_url: &str) -> Result<Self, FetchError> {
        self.esi_url = Url::parse(esi_url)?;
        self.token_url = Url::parse(token_url)?;

        Ok(self)
    }

    /// Exchanges a stored refresh token for a fresh access token at the SSO.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<AccessToken, FetchError> {
        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];

        let response = self
            .http
            .post(self.token_url.clone())
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&params)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        if status.is_server_error() {
            return Err(FetchError::Unavailable(status.as_u16()));
        }

        // The SSO answers 4xx with a JSON error body; `invalid_grant` means the
        // refresh token was revoked or never carried the required scopes.
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<SsoError>(&body) {
            Ok(sso) => Err(FetchError::TokenRejected(
                sso.error_description.unwrap_or(sso.error),
            )),
            Err(_) => Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// Fetches a corporation's complete asset list, following X-Pages pagination.
    pub async fn get_corporation_assets(
        &self,
        access_token: &str,
        corporation_id: i64,
    ) -> Result<Vec<Asset>, FetchError> {
        let url = self.url(&format!("corporations/{}/assets/", corporation_id))?;

        let mut assets: Vec<Asset> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let response = self
                .send(
                    self.http
                        .get(url.clone())
                        .bearer_auth(access_token)
                        .query(&[("page", page)]),
                )
                .await?;

            let pages = response
                .headers()
                .get("x-pages")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u32>().ok())
                .unwrap_or(1);

            let batch: Vec<Asset> = response.json().await?;
            assets.extend(batch);

            if page >= pages {
                break;
            }
            page += 1;
        }

        Ok(assets)
    }

    /// Resolves an Upwell structure; requires a token with structure read scope.
    pub async fn get_structure(
        &self,
        access_token: &str,
        structure_id: i64,
    ) -> Result<Structure, FetchError> {
        let url = self.url(&format!("universe/structures/{}/", structure_id))?;

        self.fetch_json(self.http.get(url).bearer_auth(access_token))
            .await
    }

    /// Resolves an NPC station from public data.
    pub async fn get_station(&self, station_id: i64) -> Result<Station, FetchError> {
        let url = self.url(&format!("universe/stations/{}/", station_id))?;

        self.fetch_json(self.http.get(url)).await
    }

    pub async fn get_category(&self, category_id: i64) -> Result<Category, FetchError> {
        let url = self.url(&format!("universe/categories/{}/", category_id))?;

        self.fetch_json(self.http.get(url)).await
    }

    pub async fn get_group(&self, group_id: i64) -> Result<Group, FetchError> {
        let url = self.url(&format!("universe/groups/{}/", group_id))?;

        self.fetch_json(self.http.get(url)).await
    }

    pub async fn get_type(&self, type_id: i64) -> Result<TypeInfo, FetchError> {
        let url = self.url(&format!("universe/types/{}/", type_id))?;

        self.fetch_json(self.http.get(url)).await
    }

    /// Fetches the reference price listing for all market types.
    pub async fn get_market_prices(&self) -> Result<Vec<MarketPriceEntry>, FetchError> {
        let url = self.url("markets/prices/")?;

        self.fetch_json(self.http.get(url)).await
    }

    /// Downloads the SDE type-materials dump from the configured mirror.
    ///
    /// Keys are type IDs as strings, matching the dump's JSON layout.
    pub async fn get_type_materials(
        &self,
        url: &str,
    ) -> Result<HashMap<String, TypeMaterials>, FetchError> {
        let url = Url::parse(url)?;

        self.fetch_json(self.http.get(url)).await
    }

    async fn fetch_json<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(builder).await?;

        Ok(response.json().await?)
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, FetchError> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            401 | 403 => Err(FetchError::Unauthorized(status.as_u16())),
            status if status >= 500 => Err(FetchError::Unavailable(status)),
            status => Err(FetchError::UnexpectedStatus {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.esi_url.join(path)
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::{
        esi::{model::Asset, FetchError},
        util::test::esi_fetcher,
    };

    fn mock_asset(item_id: i64, type_id: i64, location_id: i64) -> Asset {
        Asset {
            item_id,
            type_id,
            location_id,
            location_flag: "OfficeFolder".to_string(),
            location_type: "station".to_string(),
            quantity: 1,
            is_singleton: true,
        }
    }

    /// A single-page asset listing is returned as-is.
    #[tokio::test]
    async fn fetches_single_page_of_assets() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;

        let assets = vec![mock_asset(1, 27, 60_000_004), mock_asset(2, 34, 60_000_004)];
        let endpoint = test
            .server
            .mock("GET", "/corporations/1/assets/?page=1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&assets).unwrap())
            .create();

        let result = esi_fetcher(&test.server).get_corporation_assets("token", 1).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
        endpoint.assert();

        Ok(())
    }

    /// All pages advertised through X-Pages are fetched and concatenated.
    #[tokio::test]
    async fn follows_x_pages_pagination() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;

        let page_one = vec![mock_asset(1, 27, 60_000_004)];
        let page_two = vec![mock_asset(2, 27, 60_000_007)];

        let first = test
            .server
            .mock("GET", "/corporations/1/assets/?page=1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("x-pages", "2")
            .with_body(serde_json::to_string(&page_one).unwrap())
            .create();
        let second = test
            .server
            .mock("GET", "/corporations/1/assets/?page=2")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("x-pages", "2")
            .with_body(serde_json::to_string(&page_two).unwrap())
            .create();

        let result = esi_fetcher(&test.server).get_corporation_assets("token", 1).await;

        assert!(result.is_ok());
        let assets = result.unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].item_id, 1);
        assert_eq!(assets[1].item_id, 2);
        first.assert();
        second.assert();

        Ok(())
    }

    /// A 403 from ESI surfaces as Unauthorized so sync can record an expired token.
    #[tokio::test]
    async fn unauthorized_status_maps_to_unauthorized() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;

        let _endpoint = test
            .server
            .mock("GET", "/corporations/1/assets/?page=1")
            .with_status(403)
            .with_body("{\"error\":\"token is expired\"}")
            .create();

        let result = esi_fetcher(&test.server).get_corporation_assets("token", 1).await;

        assert!(matches!(result, Err(FetchError::Unauthorized(403))));

        Ok(())
    }

    /// A 5xx from ESI surfaces as Unavailable.
    #[tokio::test]
    async fn server_error_maps_to_unavailable() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;

        let _endpoint = test
            .server
            .mock("GET", "/markets/prices/")
            .with_status(502)
            .with_body("bad gateway")
            .create();

        let result = esi_fetcher(&test.server).get_market_prices().await;

        assert!(matches!(result, Err(FetchError::Unavailable(502))));

        Ok(())
    }

    /// An SSO invalid_grant body surfaces as TokenRejected.
    #[tokio::test]
    async fn sso_invalid_grant_maps_to_token_rejected() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;

        let _endpoint = test
            .server
            .mock("POST", "/v2/oauth/token")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body("{\"error\":\"invalid_grant\",\"error_description\":\"revoked\"}")
            .create();

        let result = esi_fetcher(&test.server).refresh_access_token("stale").await;

        assert!(matches!(result, Err(FetchError::TokenRejected(_))));

        Ok(())
    }
}
