use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a submitted quote. `items` is the serialized type-ID-to-quantity
    /// blob, kept verbatim.
    pub async fn create(
        &self,
        program_location_id: i32,
        user_id: i32,
        total: f64,
        items: String,
    ) -> Result<entity::notification::Model, DbErr> {
        let notification = entity::notification::ActiveModel {
            program_location_id: ActiveValue::Set(program_location_id),
            user_id: ActiveValue::Set(user_id),
            total: ActiveValue::Set(total),
            items: ActiveValue::Set(items),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get_by_program_locations(
        &self,
        program_location_ids: &[i32],
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        if program_location_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Notification::find()
            .filter(
                entity::notification::Column::ProgramLocationId
                    .is_in(program_location_ids.iter().copied()),
            )
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Deletes a notification only if it is owned by the provided user. A
    /// non-owner's delete matches nothing and removes nothing.
    pub async fn delete_owned(&self, id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Unconditional delete, reserved for managers.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Repoints a notification at another program location.
    pub async fn update_location(
        &self,
        id: i32,
        program_location_id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        let notification = match entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(notification) => notification,
            None => return Ok(None),
        };

        let mut notification_am = notification.into_active_model();
        notification_am.program_location_id = ActiveValue::Set(program_location_id);

        let notification = notification_am.update(self.db).await?;

        Ok(Some(notification))
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::data::buyback::notification::NotificationRepository;

    /// A non-owner's filtered delete matches nothing and removes nothing.
    #[tokio::test]
    async fn delete_owned_by_non_owner_has_no_effect() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        let other_user = test.insert_user_with_character(95_000_002).await?;
        let repo = NotificationRepository::new(&test.db);

        let notification = repo
            .create(
                fixture.program_location.id,
                fixture.enrolled.user.id,
                1_000_000.0,
                "{\"34\":100}".to_string(),
            )
            .await?;

        let removed = repo.delete_owned(notification.id, other_user.user.id).await?;

        assert_eq!(removed, 0);
        assert!(repo.get(notification.id).await?.is_some());

        Ok(())
    }

    /// The owner's filtered delete removes the row.
    #[tokio::test]
    async fn delete_owned_by_owner_removes_row() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        let repo = NotificationRepository::new(&test.db);

        let notification = repo
            .create(
                fixture.program_location.id,
                fixture.enrolled.user.id,
                1_000_000.0,
                "{\"34\":100}".to_string(),
            )
            .await?;

        let removed = repo
            .delete_owned(notification.id, fixture.enrolled.user.id)
            .await?;

        assert_eq!(removed, 1);
        assert!(repo.get(notification.id).await?.is_none());

        Ok(())
    }
}
