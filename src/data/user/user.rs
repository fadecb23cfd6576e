use chrono::Utc;
use entity::freyr_user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with the provided main character.
    pub async fn create(
        &self,
        main_character_id: i32,
        role: UserRole,
    ) -> Result<entity::freyr_user::Model, DbErr> {
        let user = entity::freyr_user::ActiveModel {
            main_character_id: ActiveValue::Set(main_character_id),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::freyr_user::Model>, DbErr> {
        entity::prelude::FreyrUser::find_by_id(user_id).one(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;

        entity::prelude::FreyrUser::find().count(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use entity::freyr_user::UserRole;
    use freyr_test_utils::prelude::*;

    use crate::data::{eve::character::CharacterRepository, user::UserRepository};

    #[tokio::test]
    async fn create_and_get_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let character_repo = CharacterRepository::new(&test.db);
        let user_repo = UserRepository::new(&test.db);

        let character = character_repo
            .create(95_000_001, factory::character(98_000_001))
            .await?;
        let user = user_repo.create(character.id, UserRole::Member).await?;

        let found = user_repo.get(user.id).await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().role, UserRole::Member);

        Ok(())
    }
}
