use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserCharacterRepository, error::Error, service::eve::character::CharacterService,
};

pub struct UserCharacterService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
}

impl<'a> UserCharacterService<'a> {
    /// Creates a new instance of [`UserCharacterService`]
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a eve_esi::Client) -> Self {
        Self { db, esi_client }
    }

    /// Links or transfers a character to the provided user ID.
    ///
    /// # Behavior
    /// - If the character is already linked to this user with the same owner
    ///   hash, nothing happens and `Ok(false)` is returned.
    /// - If the character is linked to another user or its owner hash changed
    ///   (the character was sold in game), the ownership entry is moved to the
    ///   provided user and `Ok(true)` is returned.
    /// - If the character has no ownership entry, one is created; the
    ///   character identity is fetched from ESI first when unknown.
    pub async fn link_character(
        &self,
        user_id: i32,
        character_id: i64,
        owner_hash: &str,
    ) -> Result<bool, Error> {
        let user_character_repo = UserCharacterRepository::new(self.db);
        let character_service = CharacterService::new(self.db, self.esi_client);

        if let Some((character, maybe_ownership)) = user_character_repo
            .get_by_character_id(character_id)
            .await?
        {
            if let Some(ownership) = maybe_ownership {
                if ownership.owner_hash == owner_hash && ownership.user_id == user_id {
                    return Ok(false);
                }

                user_character_repo
                    .update_owner(ownership.id, user_id, owner_hash.to_string())
                    .await?;

                return Ok(true);
            }

            user_character_repo
                .create(user_id, character.id, owner_hash.to_string())
                .await?;

            return Ok(true);
        }

        let character = character_service.create_character(character_id).await?;
        user_character_repo
            .create(user_id, character.id, owner_hash.to_string())
            .await?;

        Ok(true)
    }

    /// Returns the character and its ownership entry only when the character
    /// is owned by the provided user.
    pub async fn get_owned_character(
        &self,
        user_id: i32,
        character_id: i64,
    ) -> Result<
        Option<(
            entity::eve_character::Model,
            entity::freyr_user_character::Model,
        )>,
        Error,
    > {
        let user_character_repo = UserCharacterRepository::new(self.db);

        let Some((character, maybe_ownership)) = user_character_repo
            .get_by_character_id(character_id)
            .await?
        else {
            return Ok(None);
        };

        match maybe_ownership {
            Some(ownership) if ownership.user_id == user_id => Ok(Some((character, ownership))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::service::user::UserCharacterService;

    /// A character already linked to the user with the same hash is a no-op.
    #[tokio::test]
    async fn link_owned_character_is_noop() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_user_with_character(95_000_001).await?;
        let service = UserCharacterService::new(&test.db, &test.esi_client);

        let linked = service
            .link_character(fixture.user.id, 95_000_001, &fixture.ownership.owner_hash)
            .await
            .unwrap();

        assert!(!linked);

        Ok(())
    }

    /// A changed owner hash moves the ownership entry to the new user.
    #[tokio::test]
    async fn link_transfers_character_on_hash_change() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let seller = test.insert_user_with_character(95_000_001).await?;
        let buyer = test.insert_user_with_character(95_000_002).await?;
        let service = UserCharacterService::new(&test.db, &test.esi_client);

        let linked = service
            .link_character(buyer.user.id, 95_000_001, "new_owner_hash")
            .await
            .unwrap();

        assert!(linked);
        let owned = service
            .get_owned_character(buyer.user.id, 95_000_001)
            .await
            .unwrap();
        assert!(owned.is_some());
        let still_owned = service
            .get_owned_character(seller.user.id, 95_000_001)
            .await
            .unwrap();
        assert!(still_owned.is_none());

        Ok(())
    }

    /// Ownership checks reject characters owned by somebody else.
    #[tokio::test]
    async fn owned_character_lookup_is_scoped_to_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let owner = test.insert_user_with_character(95_000_001).await?;
        let other = test.insert_user_with_character(95_000_002).await?;
        let service = UserCharacterService::new(&test.db, &test.esi_client);

        let owned = service
            .get_owned_character(owner.user.id, 95_000_001)
            .await
            .unwrap();
        assert!(owned.is_some());

        let not_owned = service
            .get_owned_character(other.user.id, 95_000_001)
            .await
            .unwrap();
        assert!(not_owned.is_none());

        Ok(())
    }
}
