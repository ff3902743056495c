//! Activity Event Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of write produced the feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Bill,
    Cleaning,
    Checkin,
    Checkout,
    Order,
    System,
}

/// Dashboard activity feed entry, appended by every write operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: i64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub kind: ActivityKind,
}
