//! Submitted buyback notifications.
//!
//! A notification records a computed quote a member intends to deliver: the
//! total and the item blob are stored verbatim as an immutable audit payload.

use std::collections::{HashMap, HashSet};

use entity::freyr_user::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    data::buyback::{
        item_type::ItemTypeRepository, notification::NotificationRepository,
        program::ProgramRepository, program_location::ProgramLocationRepository,
    },
    error::{auth::AuthError, validate::ValidateError, Error},
    model::api::{NotificationDto, NotificationListDto, NotifyDto},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a submitted quote.
    ///
    /// Rejected when the program is unknown or the location does not belong
    /// to it; both surface as a 400 to the notify endpoint.
    pub async fn notify(
        &self,
        program_id: i32,
        user_id: i32,
        dto: NotifyDto,
    ) -> Result<(), Error> {
        let program_repo = ProgramRepository::new(self.db);
        let program_location_repo = ProgramLocationRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let program = program_repo
            .get(program_id)
            .await?
            .ok_or(ValidateError::UnknownProgram)?;
        let program_location = program_location_repo
            .get_by_program_and_id(program.id, dto.program_location)
            .await?
            .ok_or(ValidateError::LocationOutsideProgram)?;

        let items = serde_json::to_string(&dto.items)?;

        notification_repo
            .create(program_location.id, user_id, dto.total, items)
            .await?;

        Ok(())
    }

    /// The requesting user's own notifications, annotated with item names.
    pub async fn my_notifications(&self, user_id: i32) -> Result<NotificationListDto, Error> {
        let notifications = NotificationRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        self.annotate(notifications).await
    }

    /// All notifications of a program, annotated with item names.
    pub async fn program_notifications(
        &self,
        program_id: i32,
    ) -> Result<NotificationListDto, Error> {
        let program_location_ids = ProgramLocationRepository::new(self.db)
            .get_ids_by_program(program_id)
            .await?;
        let notifications = NotificationRepository::new(self.db)
            .get_by_program_locations(&program_location_ids)
            .await?;

        self.annotate(notifications).await
    }

    /// Builds the response DTOs plus a type-ID-to-name map covering every
    /// type that appears in the stored item blobs.
    async fn annotate(
        &self,
        notifications: Vec<entity::notification::Model>,
    ) -> Result<NotificationListDto, Error> {
        let mut type_ids: HashSet<i64> = HashSet::new();
        let mut dtos = Vec::with_capacity(notifications.len());

        for notification in notifications {
            let items: HashMap<String, i64> =
                serde_json::from_str(&notification.items).unwrap_or_default();

            for key in items.keys() {
                if let Ok(type_id) = key.parse::<i64>() {
                    type_ids.insert(type_id);
                }
            }

            dtos.push(NotificationDto {
                id: notification.id,
                program_location_id: notification.program_location_id,
                user_id: notification.user_id,
                total: notification.total,
                items,
                created_at: notification.created_at,
            });
        }

        let type_ids: Vec<i64> = type_ids.into_iter().collect();
        let item_names = ItemTypeRepository::new(self.db)
            .get_many_by_type_ids(&type_ids)
            .await?
            .into_iter()
            .map(|item| (item.type_id.to_string(), item.name))
            .collect();

        Ok(NotificationListDto {
            notifications: dtos,
            item_names,
        })
    }

    /// Removes a notification.
    ///
    /// With `mine` the delete is filtered by ownership, so a non-owner's
    /// request matches nothing. Without `mine` the caller must be a manager.
    /// Returns the number of rows removed.
    pub async fn remove(
        &self,
        notification_id: i32,
        user: &entity::freyr_user::Model,
        mine: bool,
    ) -> Result<u64, Error> {
        let notification_repo = NotificationRepository::new(self.db);

        if mine {
            return Ok(notification_repo
                .delete_owned(notification_id, user.id)
                .await?);
        }

        if user.role != UserRole::Manager {
            return Err(AuthError::ManagerRequired.into());
        }

        Ok(notification_repo.delete(notification_id).await?)
    }

    /// Repoints a notification at another location of the same program.
    pub async fn edit_location(
        &self,
        notification_id: i32,
        user: &entity::freyr_user::Model,
        mine: bool,
        new_program_location_id: i32,
    ) -> Result<entity::notification::Model, Error> {
        let notification_repo = NotificationRepository::new(self.db);
        let program_location_repo = ProgramLocationRepository::new(self.db);

        let notification = notification_repo
            .get(notification_id)
            .await?
            .ok_or(Error::NotFound("Notification"))?;

        if mine {
            if notification.user_id != user.id {
                return Err(Error::NotFound("Notification"));
            }
        } else if user.role != UserRole::Manager {
            return Err(AuthError::ManagerRequired.into());
        }

        let current_location = program_location_repo
            .get(notification.program_location_id)
            .await?
            .ok_or(Error::NotFound("Program location"))?;
        let new_location = program_location_repo
            .get_by_program_and_id(current_location.program_id, new_program_location_id)
            .await?
            .ok_or(ValidateError::LocationOutsideProgram)?;

        let notification = notification_repo
            .update_location(notification.id, new_location.id)
            .await?
            .ok_or(Error::NotFound("Notification"))?;

        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use freyr_test_utils::prelude::*;

    use crate::{
        data::buyback::notification::NotificationRepository,
        error::{validate::ValidateError, Error},
        model::api::NotifyDto,
        service::buyback::notification::NotificationService,
    };

    fn notify_dto(program_location: i32) -> NotifyDto {
        NotifyDto {
            program_location,
            total: 4_500.0,
            items: HashMap::from([("34".to_string(), 1_000)]),
        }
    }

    /// A valid submission persists a notification with the items verbatim.
    #[tokio::test]
    async fn notify_persists_notification() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        let service = NotificationService::new(&test.db);

        service
            .notify(
                fixture.program.id,
                fixture.enrolled.user.id,
                notify_dto(fixture.program_location.id),
            )
            .await
            .unwrap();

        let stored = NotificationRepository::new(&test.db)
            .get_by_user(fixture.enrolled.user.id)
            .await?;

        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].total, 4_500.0);
        assert_eq!(stored[0].items, "{\"34\":1000}");

        Ok(())
    }

    /// A location outside the program is rejected.
    #[tokio::test]
    async fn notify_rejects_foreign_location() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        let other_program = test
            .insert_program(&fixture.enrolled.buyback_corporation, "Other")
            .await?;
        let service = NotificationService::new(&test.db);

        let result = service
            .notify(
                other_program.id,
                fixture.enrolled.user.id,
                notify_dto(fixture.program_location.id),
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidateError(ValidateError::LocationOutsideProgram))
        ));

        Ok(())
    }

    /// The listing carries an item name map covering the stored blobs.
    #[tokio::test]
    async fn listing_annotates_item_names() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        test.insert_item_type(34, "Tritanium", 4).await?;
        let service = NotificationService::new(&test.db);

        service
            .notify(
                fixture.program.id,
                fixture.enrolled.user.id,
                notify_dto(fixture.program_location.id),
            )
            .await
            .unwrap();

        let listing = service
            .my_notifications(fixture.enrolled.user.id)
            .await
            .unwrap();

        assert_eq!(listing.notifications.len(), 1);
        assert_eq!(
            listing.item_names.get("34"),
            Some(&"Tritanium".to_string())
        );

        Ok(())
    }

    /// A non-owner's own-scope removal has no effect.
    #[tokio::test]
    async fn remove_mine_by_non_owner_has_no_effect() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        let other = test.insert_user_with_character(95_000_002).await?;
        let service = NotificationService::new(&test.db);

        service
            .notify(
                fixture.program.id,
                fixture.enrolled.user.id,
                notify_dto(fixture.program_location.id),
            )
            .await
            .unwrap();

        let removed = service
            .remove(1, &other.user, true)
            .await
            .unwrap();

        assert_eq!(removed, 0);

        Ok(())
    }

    /// Members cannot use the manager-scope removal.
    #[tokio::test]
    async fn remove_program_scope_requires_manager() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        let member = test.insert_user_with_character(95_000_002).await?;
        let service = NotificationService::new(&test.db);

        service
            .notify(
                fixture.program.id,
                fixture.enrolled.user.id,
                notify_dto(fixture.program_location.id),
            )
            .await
            .unwrap();

        let result = service.remove(1, &member.user, false).await;
        assert!(result.is_err());

        // The enrolled fixture user is a manager.
        let removed = service
            .remove(1, &fixture.enrolled.user, false)
            .await
            .unwrap();
        assert_eq!(removed, 1);

        Ok(())
    }

    /// Editing moves the notification to another location of the same
    /// program only.
    #[tokio::test]
    async fn edit_location_stays_within_program() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        let second_location = test.insert_location(60_000_007, "Perimeter II", 3).await?;
        let second_office = test
            .insert_office(5_002, &fixture.enrolled.buyback_corporation, &second_location)
            .await?;
        let service = NotificationService::new(&test.db);

        service
            .notify(
                fixture.program.id,
                fixture.enrolled.user.id,
                notify_dto(fixture.program_location.id),
            )
            .await
            .unwrap();

        let second_program_location = crate::data::buyback::program_location::ProgramLocationRepository::new(&test.db)
            .get_or_create(fixture.program.id, second_office.id)
            .await?;

        let updated = service
            .edit_location(1, &fixture.enrolled.user, true, second_program_location.id)
            .await
            .unwrap();
        assert_eq!(updated.program_location_id, second_program_location.id);

        let result = service
            .edit_location(1, &fixture.enrolled.user, true, 999)
            .await;
        assert!(matches!(
            result,
            Err(Error::ValidateError(ValidateError::LocationOutsideProgram))
        ));

        Ok(())
    }
}
