use entity::freyr_user::UserRole;
use oauth2::TokenResponse;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::user::{UserCharacterRepository, UserRepository},
    error::Error,
    service::{eve::character::CharacterService, user::UserCharacterService},
};

pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
}

impl<'a> CallbackService<'a> {
    /// Creates a new instance of [`CallbackService`]
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a eve_esi::Client) -> Self {
        Self { db, esi_client }
    }

    /// Completes a login: exchanges the OAuth code, validates the token JWT,
    /// and resolves the character to a user account.
    ///
    /// Returns the ID of the user the session should be bound to.
    pub async fn handle_callback(
        &self,
        code: &str,
        maybe_user_id: Option<i32>,
    ) -> Result<i32, Error> {
        let token = self.esi_client.oauth2().get_token(code).await?;

        let claims = self
            .esi_client
            .oauth2()
            .validate_token(token.access_token().secret().to_string())
            .await?;

        let character_id = claims.character_id()?;

        self.resolve_user(character_id, &claims.owner, maybe_user_id)
            .await
    }

    /// Resolves a validated (character, owner hash) pair to a user account.
    ///
    /// # Behavior
    /// - Logged-in users get the character linked as an alt.
    /// - A character with a matching ownership entry logs its user in.
    /// - A character whose owner hash changed was sold in game; it is moved
    ///   to a fresh account instead of logging into the seller's.
    /// - An unknown character creates a new user. The very first user of an
    ///   installation is made a manager so programs can be bootstrapped.
    pub async fn resolve_user(
        &self,
        character_id: i64,
        owner_hash: &str,
        maybe_user_id: Option<i32>,
    ) -> Result<i32, Error> {
        let user_repo = UserRepository::new(self.db);
        let user_character_repo = UserCharacterRepository::new(self.db);
        let user_character_service = UserCharacterService::new(self.db, self.esi_client);
        let character_service = CharacterService::new(self.db, self.esi_client);

        if let Some(user_id) = maybe_user_id {
            user_character_service
                .link_character(user_id, character_id, owner_hash)
                .await?;

            return Ok(user_id);
        }

        if let Some((character, Some(ownership))) = user_character_repo
            .get_by_character_id(character_id)
            .await?
        {
            if ownership.owner_hash == owner_hash {
                return Ok(ownership.user_id);
            }

            // Owner hash changed: the character was transferred in game. Bind
            // it to a fresh account rather than the previous owner's.
            let user = user_repo.create(character.id, UserRole::Member).await?;
            user_character_repo
                .update_owner(ownership.id, user.id, owner_hash.to_string())
                .await?;

            info!(
                "Character {} changed owners, moved to new user {}",
                character_id, user.id
            );

            return Ok(user.id);
        }

        let character = character_service
            .get_or_create_character(character_id)
            .await?;

        let role = if user_repo.count().await? == 0 {
            UserRole::Manager
        } else {
            UserRole::Member
        };

        let user = user_repo.create(character.id, role).await?;
        user_character_repo
            .create(user.id, character.id, owner_hash.to_string())
            .await?;

        Ok(user.id)
    }
}
