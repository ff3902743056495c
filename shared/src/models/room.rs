//! Room Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Room status
///
/// available → occupied via check-in, back to available via check-out.
/// Maintenance is set manually and is untouched by check-in/out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub number: i32,
    pub name: String,
    pub status: RoomStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
}

/// Check-in payload: guest name plus stay range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCheckIn {
    pub room_id: i64,
    pub guest_name: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}
