use chrono::Utc;
use eve_esi::model::character::Character;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a character identity entry from an ESI character payload.
    pub async fn create(
        &self,
        character_id: i64,
        character: Character,
    ) -> Result<entity::eve_character::Model, DbErr> {
        let character = entity::eve_character::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            name: ActiveValue::Set(character.name),
            corporation_id: ActiveValue::Set(character.corporation_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::eve_character::Model>, DbErr> {
        entity::prelude::EveCharacter::find_by_id(id).one(self.db).await
    }

    /// Finds a character by its EVE Online character ID.
    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Option<entity::eve_character::Model>, DbErr> {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::data::eve::character::CharacterRepository;

    #[tokio::test]
    async fn create_and_find_by_character_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let repo = CharacterRepository::new(&test.db);

        let created = repo.create(95_000_001, factory::character(98_000_001)).await?;

        let found = repo.get_by_character_id(95_000_001).await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().id, created.id);

        Ok(())
    }
}
