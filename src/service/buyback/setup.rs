//! Corporation enrollment (setup) flow.
//!
//! A manager authorizes a sync character through EVE SSO with asset, structure,
//! and contract scopes; the captured refresh token is stored on the enrollment
//! and used by every subsequent office sync.

use oauth2::TokenResponse;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::buyback::corporation::BuybackCorporationRepository,
    error::{auth::AuthError, Error},
    service::{eve::corporation::CorporationService, user::UserCharacterService},
};

pub struct SetupService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
}

impl<'a> SetupService<'a> {
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a eve_esi::Client) -> Self {
        Self { db, esi_client }
    }

    /// Completes a setup callback: validates the token, checks the character
    /// is owned by the logged-in manager, and enrolls (or re-enrolls) the
    /// character's corporation with the captured refresh token.
    pub async fn handle_callback(
        &self,
        code: &str,
        user: &entity::freyr_user::Model,
    ) -> Result<entity::buyback_corporation::Model, Error> {
        let token = self.esi_client.oauth2().get_token(code).await?;

        let claims = self
            .esi_client
            .oauth2()
            .validate_token(token.access_token().secret().to_string())
            .await?;

        let character_id = claims.character_id()?;
        let refresh_token = token
            .refresh_token()
            .ok_or(AuthError::RefreshTokenMissing)?
            .secret()
            .to_string();

        self.enroll(user, character_id, &claims.name, refresh_token)
            .await
    }

    /// Enrolls the corporation of `character_id` with `user`'s ownership entry
    /// as sync character.
    ///
    /// Only main or alt characters of the logged-in user are accepted.
    /// Re-enrolling an already enrolled corporation refreshes its sync
    /// character and token.
    pub async fn enroll(
        &self,
        user: &entity::freyr_user::Model,
        character_id: i64,
        character_name: &str,
        refresh_token: String,
    ) -> Result<entity::buyback_corporation::Model, Error> {
        let user_character_service = UserCharacterService::new(self.db, self.esi_client);
        let corporation_service = CorporationService::new(self.db, self.esi_client);
        let corporation_repo = BuybackCorporationRepository::new(self.db);

        let (character, ownership) = user_character_service
            .get_owned_character(user.id, character_id)
            .await?
            .ok_or_else(|| AuthError::CharacterNotOwned(character_name.to_string()))?;

        let corporation = corporation_service
            .get_or_create_corporation(character.corporation_id)
            .await?;

        let enrollment = corporation_repo
            .upsert(corporation.id, ownership.id, refresh_token)
            .await?;

        info!(
            "Corporation {} enrolled with sync character {}",
            corporation.name, character.name
        );

        Ok(enrollment)
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::{
        data::buyback::corporation::BuybackCorporationRepository,
        error::{auth::AuthError, Error},
        service::buyback::setup::SetupService,
    };

    fn corporation_endpoint(
        server: &mut mockito::ServerGuard,
        corporation_id: i64,
    ) -> mockito::Mock {
        server
            .mock("GET", format!("/corporations/{}", corporation_id).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&factory::corporation()).unwrap())
            .create()
    }

    /// Enrolling with an owned character stores the corporation and token.
    #[tokio::test]
    async fn enroll_stores_corporation_and_token() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_user_with_character(95_000_001).await?;
        let _corporation = corporation_endpoint(&mut test.server, 98_000_000);
        let service = SetupService::new(&test.db, &test.esi_client);

        let enrollment = service
            .enroll(
                &fixture.user,
                95_000_001,
                &fixture.character.name,
                "captured_token".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(enrollment.refresh_token, "captured_token");
        assert_eq!(enrollment.sync_character_id, fixture.ownership.id);

        Ok(())
    }

    /// Re-enrolling the same corporation updates the existing enrollment.
    #[tokio::test]
    async fn reenroll_updates_existing_enrollment() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_user_with_character(95_000_001).await?;
        let _corporation = corporation_endpoint(&mut test.server, 98_000_000);
        let service = SetupService::new(&test.db, &test.esi_client);

        let first = service
            .enroll(
                &fixture.user,
                95_000_001,
                &fixture.character.name,
                "first_token".to_string(),
            )
            .await
            .unwrap();
        let second = service
            .enroll(
                &fixture.user,
                95_000_001,
                &fixture.character.name,
                "second_token".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.refresh_token, "second_token");
        assert_eq!(
            BuybackCorporationRepository::new(&test.db).get_all().await?.len(),
            1
        );

        Ok(())
    }

    /// A character owned by somebody else is rejected.
    #[tokio::test]
    async fn enroll_rejects_unowned_character() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let manager = test.insert_user_with_character(95_000_001).await?;
        let other = test.insert_user_with_character(95_000_002).await?;
        let service = SetupService::new(&test.db, &test.esi_client);

        let result = service
            .enroll(
                &manager.user,
                other.character.character_id,
                &other.character.name,
                "token".to_string(),
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::CharacterNotOwned(_)))
        ));

        Ok(())
    }
}
