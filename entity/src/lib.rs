//! SeaORM entity definitions for the Freyr database schema.

pub mod prelude;

pub mod buyback_corporation;
pub mod contract;
pub mod eve_character;
pub mod eve_corporation;
pub mod freyr_user;
pub mod freyr_user_character;
pub mod item_type;
pub mod item_type_material;
pub mod location;
pub mod market_price;
pub mod notification;
pub mod office;
pub mod program;
pub mod program_item;
pub mod program_location;
