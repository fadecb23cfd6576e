use sea_orm::DatabaseConnection;

use crate::{
    data::eve::character::CharacterRepository, error::Error,
    service::eve::corporation::CorporationService,
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a eve_esi::Client) -> Self {
        Self { db, esi_client }
    }

    /// Fetches a character from EVE Online's ESI and creates a database entry.
    ///
    /// The character's corporation identity is cached alongside so callers can
    /// rely on it being resolvable without another ESI round trip.
    pub async fn create_character(
        &self,
        character_id: i64,
    ) -> Result<entity::eve_character::Model, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let corporation_service = CorporationService::new(self.db, self.esi_client);

        let character = self
            .esi_client
            .character()
            .get_character_public_information(character_id)
            .await?;

        corporation_service
            .get_or_create_corporation(character.corporation_id)
            .await?;

        let character = character_repo.create(character_id, character).await?;

        Ok(character)
    }

    /// Returns the cached character entry, fetching it from ESI on first
    /// reference.
    pub async fn get_or_create_character(
        &self,
        character_id: i64,
    ) -> Result<entity::eve_character::Model, Error> {
        let character_repo = CharacterRepository::new(self.db);

        if let Some(character) = character_repo.get_by_character_id(character_id).await? {
            return Ok(character);
        }

        self.create_character(character_id).await
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::service::eve::character::CharacterService;

    /// Creating a character also caches its corporation identity.
    #[tokio::test]
    async fn create_character_caches_corporation() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_buyback_tables()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/characters/95000001")
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(
                        serde_json::to_string(&factory::character(98_000_001)).unwrap(),
                    )
                    .expect(1)
                    .create()
            })
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
        let service = CharacterService::new(&test.db, &test.esi_client);

        let character = service.get_or_create_character(95_000_001).await;

        assert!(character.is_ok());
        assert_eq!(character.unwrap().corporation_id, 98_000_001);
        test.assert_mocks();

        Ok(())
    }
}
