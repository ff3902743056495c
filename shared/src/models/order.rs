//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dine-in order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Placed,
    Preparing,
    Ready,
    Served,
}

/// A single order line, snapshotted from the menu at submit time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item reference
    pub id: i64,
    pub name: String,
    pub qty: u32,
    /// Unit price in currency unit
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_for_chef: Option<String>,
}

/// Placed dine-in order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub table_number: i32,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

/// Order submission payload, built from the cart at submit time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    pub table_number: i32,
    /// Line items ordered by menu item id
    pub items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    /// Computed cart total in currency unit
    pub total: f64,
}

/// Per-table order detail as shown on the table management page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOrderDetail {
    pub table_id: i64,
    pub items: Vec<OrderItem>,
    pub total: f64,
}

/// Generated invoice stub
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: String,
    pub generated_at: DateTime<Utc>,
}
