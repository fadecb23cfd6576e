//! Request and response DTOs for the HTTP API.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub character_id: i64,
    pub character_name: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CorporationDto {
    pub id: i32,
    pub corporation_id: i64,
    pub name: String,
    pub ticker: String,
    /// Status message of the most recent office sync, e.g. "No error".
    pub sync_status: String,
    pub last_synced_at: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OfficeDto {
    pub id: i32,
    pub office_id: i64,
    pub location_name: String,
    pub solar_system_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgramDto {
    pub id: i32,
    pub name: String,
    pub corporation_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgramItemDto {
    pub type_id: i64,
    pub name: String,
    pub brokerage: i32,
    pub use_refined_value: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgramLocationDto {
    pub id: i32,
    pub office_id: i32,
    pub location_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgramDetailDto {
    pub id: i32,
    pub name: String,
    pub corporation_name: String,
    pub items: Vec<ProgramItemDto>,
    pub locations: Vec<ProgramLocationDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateProgramDto {
    /// Database ID of the enrolled corporation the program belongs to.
    pub corporation_id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddProgramItemDto {
    /// EVE Online type ID of the accepted item.
    pub type_id: i64,
    /// Percent the corporation keeps on top of the reference price.
    pub brokerage: i32,
    /// Price ore by its refined end products instead of the raw item.
    #[serde(default)]
    pub use_refined_value: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddProgramLocationDto {
    /// Database ID of the office to accept buybacks at.
    pub office_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculateDto {
    /// Program location the items would be dropped off at.
    pub program_location: i32,
    /// Pasted inventory text, one item per line.
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculationLineDto {
    pub type_id: i64,
    pub name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculationDto {
    pub lines: Vec<CalculationLineDto>,
    pub total: f64,
    /// Recognized item names that are not part of this program.
    pub unmatched: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotifyDto {
    pub program_location: i32,
    pub total: f64,
    /// Quantities keyed by type ID, stored verbatim on the notification.
    pub items: HashMap<String, i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EditNotificationDto {
    pub program_location: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub program_location_id: i32,
    pub user_id: i32,
    pub total: f64,
    pub items: HashMap<String, i64>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationListDto {
    pub notifications: Vec<NotificationDto>,
    /// Item names keyed by type ID, covering every type that appears in the
    /// notification blobs.
    pub item_names: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemSuggestionDto {
    pub value: i64,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContractDto {
    pub contract_id: i64,
    pub price: f64,
    pub status: String,
    pub date_issued: NaiveDateTime,
    pub character_name: String,
}
