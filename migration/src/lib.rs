pub use sea_orm_migration::prelude::*;

mod m20260115_000001_eve_corporation;
mod m20260115_000002_eve_character;
mod m20260115_000003_freyr_user;
mod m20260115_000004_freyr_user_character;
mod m20260115_000005_buyback_corporation;
mod m20260115_000006_location;
mod m20260115_000007_office;
mod m20260115_000008_item_type;
mod m20260115_000009_item_type_material;
mod m20260115_000010_market_price;
mod m20260115_000011_program;
mod m20260115_000012_program_item;
mod m20260115_000013_program_location;
mod m20260115_000014_notification;
mod m20260115_000015_contract;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_eve_corporation::Migration),
            Box::new(m20260115_000002_eve_character::Migration),
            Box::new(m20260115_000003_freyr_user::Migration),
            Box::new(m20260115_000004_freyr_user_character::Migration),
            Box::new(m20260115_000005_buyback_corporation::Migration),
            Box::new(m20260115_000006_location::Migration),
            Box::new(m20260115_000007_office::Migration),
            Box::new(m20260115_000008_item_type::Migration),
            Box::new(m20260115_000009_item_type_material::Migration),
            Box::new(m20260115_000010_market_price::Migration),
            Box::new(m20260115_000011_program::Migration),
            Box::new(m20260115_000012_program_item::Migration),
            Box::new(m20260115_000013_program_location::Migration),
            Box::new(m20260115_000014_notification::Migration),
            Box::new(m20260115_000015_contract::Migration),
        ]
    }
}
