//! Fixture helpers inserting common row combinations.
//!
//! All helpers insert directly through entity active models so the harness
//! stays independent of the server crate's repository layer.

pub mod factory;

use chrono::Utc;
use entity::freyr_user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{context::TestContext, error::TestError};

const CATEGORY_ASTEROID: i64 = 25;

/// A corporation enrolled for buybacks, with the identity rows backing it.
pub struct EnrolledCorporation {
    pub corporation: entity::eve_corporation::Model,
    pub character: entity::eve_character::Model,
    pub user: entity::freyr_user::Model,
    pub ownership: entity::freyr_user_character::Model,
    pub buyback_corporation: entity::buyback_corporation::Model,
}

/// A member user with one owned character.
pub struct UserWithCharacter {
    pub user: entity::freyr_user::Model,
    pub character: entity::eve_character::Model,
    pub ownership: entity::freyr_user_character::Model,
}

/// An enrolled corporation with one program accepting buybacks at one office.
pub struct ProgramWithLocation {
    pub enrolled: EnrolledCorporation,
    pub program: entity::program::Model,
    pub location: entity::location::Model,
    pub office: entity::office::Model,
    pub program_location: entity::program_location::Model,
}

impl TestContext {
    /// Inserts a corporation identity, a manager user owning `character_id`,
    /// and the buyback enrollment tying them together.
    pub async fn insert_enrolled_corporation(
        &self,
        corporation_id: i64,
        character_id: i64,
    ) -> Result<EnrolledCorporation, TestError> {
        let now = Utc::now().naive_utc();

        let corporation = entity::eve_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(format!("Test Corporation {}", corporation_id)),
            ticker: ActiveValue::Set("TESTC".to_string()),
            member_count: ActiveValue::Set(42),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let character = entity::eve_character::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            name: ActiveValue::Set(format!("Test Character {}", character_id)),
            corporation_id: ActiveValue::Set(corporation_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let user = entity::freyr_user::ActiveModel {
            main_character_id: ActiveValue::Set(character.id),
            role: ActiveValue::Set(UserRole::Manager),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let ownership = entity::freyr_user_character::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            character_id: ActiveValue::Set(character.id),
            owner_hash: ActiveValue::Set(format!("owner_hash_{}", character_id)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let buyback_corporation = entity::buyback_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation.id),
            sync_character_id: ActiveValue::Set(ownership.id),
            refresh_token: ActiveValue::Set("refresh_token".to_string()),
            sync_error: ActiveValue::Set(0),
            last_synced_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(EnrolledCorporation {
            corporation,
            character,
            user,
            ownership,
            buyback_corporation,
        })
    }

    /// Inserts a member user owning a single character.
    pub async fn insert_user_with_character(
        &self,
        character_id: i64,
    ) -> Result<UserWithCharacter, TestError> {
        let now = Utc::now().naive_utc();

        let character = entity::eve_character::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            name: ActiveValue::Set(format!("Test Character {}", character_id)),
            corporation_id: ActiveValue::Set(98_000_000),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let user = entity::freyr_user::ActiveModel {
            main_character_id: ActiveValue::Set(character.id),
            role: ActiveValue::Set(UserRole::Member),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        let ownership = entity::freyr_user_character::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            character_id: ActiveValue::Set(character.id),
            owner_hash: ActiveValue::Set(format!("owner_hash_{}", character_id)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(UserWithCharacter {
            user,
            character,
            ownership,
        })
    }

    pub async fn insert_program(
        &self,
        corporation: &entity::buyback_corporation::Model,
        name: &str,
    ) -> Result<entity::program::Model, TestError> {
        let now = Utc::now().naive_utc();

        let program = entity::program::ActiveModel {
            corporation_id: ActiveValue::Set(corporation.id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(program)
    }

    pub async fn insert_location(
        &self,
        location_id: i64,
        name: &str,
        category: i16,
    ) -> Result<entity::location::Model, TestError> {
        let now = Utc::now().naive_utc();

        let location = entity::location::ActiveModel {
            location_id: ActiveValue::Set(location_id),
            name: ActiveValue::Set(name.to_string()),
            solar_system_id: ActiveValue::Set(Some(30_000_142)),
            category: ActiveValue::Set(category),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(location)
    }

    pub async fn insert_office(
        &self,
        office_id: i64,
        corporation: &entity::buyback_corporation::Model,
        location: &entity::location::Model,
    ) -> Result<entity::office::Model, TestError> {
        let now = Utc::now().naive_utc();

        let office = entity::office::ActiveModel {
            office_id: ActiveValue::Set(office_id),
            corporation_id: ActiveValue::Set(corporation.id),
            location_id: ActiveValue::Set(location.id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(office)
    }

    /// Inserts a published item type. Asteroid types get a refining portion
    /// size of 100; everything else refines one-to-one.
    pub async fn insert_item_type(
        &self,
        type_id: i64,
        name: &str,
        category_id: i64,
    ) -> Result<entity::item_type::Model, TestError> {
        let now = Utc::now().naive_utc();
        let portion_size = if category_id == CATEGORY_ASTEROID { 100 } else { 1 };

        let item_type = entity::item_type::ActiveModel {
            type_id: ActiveValue::Set(type_id),
            name: ActiveValue::Set(name.to_string()),
            published: ActiveValue::Set(true),
            group_id: ActiveValue::Set(0),
            category_id: ActiveValue::Set(category_id),
            portion_size: ActiveValue::Set(portion_size),
            volume: ActiveValue::Set(0.1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(item_type)
    }

    pub async fn insert_market_price(
        &self,
        type_id: i64,
        average_price: f64,
    ) -> Result<entity::market_price::Model, TestError> {
        let now = Utc::now().naive_utc();

        let price = entity::market_price::ActiveModel {
            type_id: ActiveValue::Set(type_id),
            average_price: ActiveValue::Set(Some(average_price)),
            adjusted_price: ActiveValue::Set(Some(average_price)),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(price)
    }

    pub async fn insert_contract(
        &self,
        contract_id: i64,
        character: &entity::eve_character::Model,
        program_id: Option<i32>,
        price: f64,
    ) -> Result<entity::contract::Model, TestError> {
        let now = Utc::now().naive_utc();

        let contract = entity::contract::ActiveModel {
            contract_id: ActiveValue::Set(contract_id),
            program_id: ActiveValue::Set(program_id),
            character_id: ActiveValue::Set(character.id),
            price: ActiveValue::Set(price),
            status: ActiveValue::Set("finished".to_string()),
            date_issued: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(contract)
    }

    /// Inserts an enrolled corporation, one program, and one office enabled
    /// for that program.
    pub async fn insert_program_with_location(
        &self,
        corporation_id: i64,
        character_id: i64,
    ) -> Result<ProgramWithLocation, TestError> {
        let enrolled = self
            .insert_enrolled_corporation(corporation_id, character_id)
            .await?;
        let program = self
            .insert_program(&enrolled.buyback_corporation, "Ore Buyback")
            .await?;
        let location = self
            .insert_location(
                60_000_004,
                "Jita IV - Moon 4 - Caldari Navy Assembly Plant",
                3,
            )
            .await?;
        let office = self
            .insert_office(5_001, &enrolled.buyback_corporation, &location)
            .await?;

        let now = Utc::now().naive_utc();
        let program_location = entity::program_location::ActiveModel {
            program_id: ActiveValue::Set(program.id),
            office_id: ActiveValue::Set(office.id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(ProgramWithLocation {
            enrolled,
            program,
            location,
            office,
            program_location,
        })
    }
}
