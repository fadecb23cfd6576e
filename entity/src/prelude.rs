pub use super::buyback_corporation::Entity as BuybackCorporation;
pub use super::contract::Entity as Contract;
pub use super::eve_character::Entity as EveCharacter;
pub use super::eve_corporation::Entity as EveCorporation;
pub use super::freyr_user::Entity as FreyrUser;
pub use super::freyr_user_character::Entity as FreyrUserCharacter;
pub use super::item_type::Entity as ItemType;
pub use super::item_type_material::Entity as ItemTypeMaterial;
pub use super::location::Entity as Location;
pub use super::market_price::Entity as MarketPrice;
pub use super::notification::Entity as Notification;
pub use super::office::Entity as Office;
pub use super::program::Entity as Program;
pub use super::program_item::Entity as ProgramItem;
pub use super::program_location::Entity as ProgramLocation;
