use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct UserCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new entry for a character owned by a user
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `character_id` (`i32`): ID of the character entry in the database
    /// - `owner_hash` (`String`): A string representing the ownership of the character
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
        owner_hash: String,
    ) -> Result<entity::freyr_user_character::Model, DbErr> {
        let user_character = entity::freyr_user_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            owner_hash: ActiveValue::Set(owner_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user_character.insert(self.db).await
    }

    /// Get a character and its ownership entry using the EVE Online character ID
    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<
        Option<(
            entity::eve_character::Model,
            Option<entity::freyr_user_character::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .find_also_related(entity::freyr_user_character::Entity)
            .one(self.db)
            .await
    }

    /// Gets all character ownership entries for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::freyr_user_character::Model>, DbErr> {
        entity::prelude::FreyrUserCharacter::find()
            .filter(entity::freyr_user_character::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Moves an ownership entry to a new user, refreshing its owner hash.
    pub async fn update_owner(
        &self,
        entry_id: i32,
        new_user_id: i32,
        owner_hash: String,
    ) -> Result<Option<entity::freyr_user_character::Model>, DbErr> {
        let user_character = match entity::prelude::FreyrUserCharacter::find_by_id(entry_id)
            .one(self.db)
            .await?
        {
            Some(user_character) => user_character,
            None => return Ok(None),
        };

        let mut user_character_am = user_character.into_active_model();
        user_character_am.user_id = ActiveValue::Set(new_user_id);
        user_character_am.owner_hash = ActiveValue::Set(owner_hash);
        user_character_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user_character = user_character_am.update(self.db).await?;

        Ok(Some(user_character))
    }
}
