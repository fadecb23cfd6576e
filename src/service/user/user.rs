use entity::freyr_user::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    data::{eve::character::CharacterRepository, user::UserRepository},
    error::Error,
    model::api::UserDto,
};

/// Role label as rendered in API responses.
pub fn role_label(role: &UserRole) -> &'static str {
    match role {
        UserRole::Member => "member",
        UserRole::Manager => "manager",
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user together with their main character identity.
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);

        let Some(user) = user_repo.get(user_id).await? else {
            return Ok(None);
        };

        let main_character = character_repo
            .get(user.main_character_id)
            .await?
            .ok_or(sea_orm::DbErr::RecordNotFound(format!(
                "Main character entry {} missing for user {}",
                user.main_character_id, user.id
            )))?;

        Ok(Some(UserDto {
            id: user.id,
            character_id: main_character.character_id,
            character_name: main_character.name,
            role: role_label(&user.role).to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use entity::freyr_user::UserRole;
    use freyr_test_utils::prelude::*;

    use crate::service::user::UserService;

    /// The DTO carries the main character identity and the role label.
    #[tokio::test]
    async fn get_user_includes_main_character() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_user_with_character(95_000_001).await?;
        let service = UserService::new(&test.db);

        let user = service.get_user(fixture.user.id).await.unwrap();

        assert!(user.is_some());
        let user = user.unwrap();
        assert_eq!(user.character_id, 95_000_001);
        assert_eq!(user.role, "member");
        assert_eq!(fixture.user.role, UserRole::Member);

        Ok(())
    }

    /// Expect None for a user that does not exist.
    #[tokio::test]
    async fn get_missing_user_returns_none() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let service = UserService::new(&test.db);

        let user = service.get_user(999).await.unwrap();

        assert!(user.is_none());

        Ok(())
    }
}
