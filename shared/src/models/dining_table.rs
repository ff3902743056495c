//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table status
///
/// Cycle: available → occupied → needs_cleaning → available, driven
/// entirely by explicit status updates. There is no automatic transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    NeedsCleaning,
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub number: i32,
    pub capacity: i32,
    pub status: TableStatus,
    /// Running bill for the seated party
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_bill: Option<f64>,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    /// Defaults to "Table {number}"
    pub name: Option<String>,
    pub number: i32,
    pub capacity: Option<i32>,
}
