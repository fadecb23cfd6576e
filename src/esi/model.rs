//! Response models for the ESI endpoints used by Freyr.
//!
//! `Serialize` is derived alongside `Deserialize` so test fixtures can produce mock
//! response bodies from the same types.

use serde::{Deserialize, Serialize};

/// One row of a corporation asset listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub item_id: i64,
    pub type_id: i64,
    pub location_id: i64,
    pub location_flag: String,
    pub location_type: String,
    pub quantity: i64,
    pub is_singleton: bool,
}

/// An Upwell structure, resolved with an authenticated token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub name: String,
    pub solar_system_id: i64,
    #[serde(default)]
    pub type_id: Option<i64>,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// An NPC station, resolved from public data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub system_id: i64,
    #[serde(default)]
    pub type_id: Option<i64>,
    #[serde(default)]
    pub owner: Option<i64>,
}

/// An item type as returned by `/universe/types/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeInfo {
    pub type_id: i64,
    pub name: String,
    pub published: bool,
    pub group_id: i64,
    #[serde(default)]
    pub portion_size: Option<i32>,
    #[serde(default)]
    pub volume: Option<f64>,
}

/// An item group as returned by `/universe/groups/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub group_id: i64,
    pub category_id: i64,
    pub name: String,
    pub published: bool,
    pub types: Vec<i64>,
}

/// An item category as returned by `/universe/categories/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
    pub published: bool,
    pub groups: Vec<i64>,
}

/// One row of the `/markets/prices/` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPriceEntry {
    pub type_id: i64,
    #[serde(default)]
    pub average_price: Option<f64>,
    #[serde(default)]
    pub adjusted_price: Option<f64>,
}

/// Access token minted from a stored refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// SSO error body returned with a non-success token response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsoError {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Refining yields of a single type from the SDE type materials dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMaterials {
    pub materials: Vec<TypeMaterial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMaterial {
    #[serde(alias = "materialTypeID")]
    pub material_type_id: i64,
    pub quantity: i64,
}
