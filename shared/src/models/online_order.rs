//! Online Order Model

use serde::{Deserialize, Serialize};

/// Delivery aggregator the order came in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Zomato,
    Swiggy,
}

/// Online order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnlineOrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
}

/// Online order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineOrder {
    pub id: String,
    pub platform: Platform,
    /// Aggregator-side order reference
    pub order_ref: String,
    /// Dish names as the aggregator sends them, no catalog link
    pub items: Vec<String>,
    pub total: f64,
    pub status: OnlineOrderStatus,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
}
