use sea_orm::DatabaseConnection;

use crate::{data::eve::corporation::CorporationRepository, error::Error};

pub struct CorporationService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
}

impl<'a> CorporationService<'a> {
    /// Creates a new instance of [`CorporationService`]
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a eve_esi::Client) -> Self {
        Self { db, esi_client }
    }

    /// Fetches a corporation from EVE Online's ESI and creates a database entry
    pub async fn create_corporation(
        &self,
        corporation_id: i64,
    ) -> Result<entity::eve_corporation::Model, Error> {
        let corporation_repo = CorporationRepository::new(self.db);

        let corporation = self
            .esi_client
            .corporation()
            .get_corporation_information(corporation_id)
            .await?;

        let corporation = corporation_repo.create(corporation_id, corporation).await?;

        Ok(corporation)
    }

    /// Returns the cached corporation entry, fetching it from ESI on first
    /// reference.
    pub async fn get_or_create_corporation(
        &self,
        corporation_id: i64,
    ) -> Result<entity::eve_corporation::Model, Error> {
        let corporation_repo = CorporationRepository::new(self.db);

        if let Some(corporation) = corporation_repo
            .get_by_corporation_id(corporation_id)
            .await?
        {
            return Ok(corporation);
        }

        self.create_corporation(corporation_id).await
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::service::eve::corporation::CorporationService;

    /// Expect an ESI fetch on first reference and a cache hit afterwards.
    #[tokio::test]
    async fn get_or_create_fetches_once() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_buyback_tables()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/corporations/98000001")
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(serde_json::to_string(&factory::corporation()).unwrap())
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        let service = CorporationService::new(&test.db, &test.esi_client);

        let created = service.get_or_create_corporation(98_000_001).await;
        assert!(created.is_ok());

        let cached = service.get_or_create_corporation(98_000_001).await;
        assert!(cached.is_ok());
        assert_eq!(cached.unwrap().id, created.unwrap().id);

        test.assert_mocks();

        Ok(())
    }
}
