//! EVE Online domain constants used across the buyback services.

/// Inventory type ID of a corporation office asset.
pub const OFFICE_TYPE_ID: i64 = 27;

/// Inventory category of stations.
pub const LOCATION_CATEGORY_STATION: i16 = 3;
/// Inventory category of Upwell structures.
pub const LOCATION_CATEGORY_STRUCTURE: i16 = 65;
/// Fallback category when a location cannot be resolved.
pub const LOCATION_CATEGORY_UNKNOWN: i16 = 0;

// NPC station and Upwell structure ID ranges, per CCP's ID documentation.
pub const STATION_ID_MIN: i64 = 60_000_000;
pub const STATION_ID_MAX: i64 = 64_000_000;
pub const STRUCTURE_ID_MIN: i64 = 1_000_000_000_000;

/// Inclusive bounds of the brokerage percentage accepted by program items.
pub const BROKERAGE_MIN: i32 = 1;
pub const BROKERAGE_MAX: i32 = 100;

pub const EVE_CATEGORY_ID_MATERIAL: i64 = 4;
pub const EVE_CATEGORY_ID_SHIP: i64 = 6;
pub const EVE_CATEGORY_ID_MODULE: i64 = 7;
pub const EVE_CATEGORY_ID_CHARGE: i64 = 8;
pub const EVE_CATEGORY_ID_BLUEPRINT: i64 = 9;
pub const EVE_CATEGORY_ID_COMMODITY: i64 = 17;
pub const EVE_CATEGORY_ID_DRONE: i64 = 18;
pub const EVE_CATEGORY_ID_ASTEROID: i64 = 25;
pub const EVE_CATEGORY_ID_PLANETARY_COMMODITY: i64 = 43;
pub const EVE_CATEGORY_ID_FIGHTER: i64 = 87;
pub const EVE_GROUP_ID_HARVESTABLE_CLOUD: i64 = 711;

/// Categories preloaded by the item type import job, matching what buyback
/// programs commonly accept.
pub const IMPORT_CATEGORY_IDS: [i64; 9] = [
    EVE_CATEGORY_ID_MATERIAL,
    EVE_CATEGORY_ID_SHIP,
    EVE_CATEGORY_ID_MODULE,
    EVE_CATEGORY_ID_CHARGE,
    EVE_CATEGORY_ID_COMMODITY,
    EVE_CATEGORY_ID_DRONE,
    EVE_CATEGORY_ID_ASTEROID,
    EVE_CATEGORY_ID_PLANETARY_COMMODITY,
    EVE_CATEGORY_ID_FIGHTER,
];

/// ESI scopes required from the corporation sync character during setup.
pub const SETUP_SCOPES: [&str; 4] = [
    "esi-universe.read_structures.v1",
    "esi-assets.read_corporation_assets.v1",
    "esi-contracts.read_corporation_contracts.v1",
    "publicData",
];
