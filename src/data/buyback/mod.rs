pub mod contract;
pub mod corporation;
pub mod item_type;
pub mod location;
pub mod market_price;
pub mod notification;
pub mod office;
pub mod program;
pub mod program_item;
pub mod program_location;
