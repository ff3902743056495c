//! Shared in-memory sample state

use crate::samples;
use chrono::Utc;
use parking_lot::RwLock;
use shared::models::{
    ActivityEvent, ActivityKind, DiningTable, MenuItem, OnlineOrder, Order, Room,
};
use shared::util::snowflake_id;
use std::sync::Arc;

/// Module-held mutable sample collections, shared by every backend handle.
///
/// One lock per collection and no transactions: overlapping calls can
/// interleave arbitrarily. Acceptable only because this is disposable
/// sample data, not a real resource.
#[derive(Clone)]
pub struct SampleStore {
    pub(crate) menu: Arc<RwLock<Vec<MenuItem>>>,
    pub(crate) tables: Arc<RwLock<Vec<DiningTable>>>,
    pub(crate) rooms: Arc<RwLock<Vec<Room>>>,
    pub(crate) online_orders: Arc<RwLock<Vec<OnlineOrder>>>,
    /// Orders placed this session, newest last
    pub(crate) orders: Arc<RwLock<Vec<Order>>>,
    /// Dashboard feed, newest last
    pub(crate) activity: Arc<RwLock<Vec<ActivityEvent>>>,
}

impl SampleStore {
    /// Store pre-loaded with the sample datasets
    pub fn seeded() -> Self {
        Self {
            menu: Arc::new(RwLock::new(samples::sample_menu_items())),
            tables: Arc::new(RwLock::new(samples::sample_tables())),
            rooms: Arc::new(RwLock::new(samples::sample_rooms())),
            online_orders: Arc::new(RwLock::new(samples::sample_online_orders())),
            orders: Arc::new(RwLock::new(Vec::new())),
            activity: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append an entry to the dashboard activity feed
    pub(crate) fn record_activity(&self, kind: ActivityKind, message: impl Into<String>) {
        self.activity.write().push(ActivityEvent {
            id: snowflake_id(),
            message: message.into(),
            timestamp: Utc::now(),
            kind,
        });
    }

    /// Snapshot of the activity feed, newest last
    pub fn recent_activity(&self) -> Vec<ActivityEvent> {
        self.activity.read().clone()
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl std::fmt::Debug for SampleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleStore")
            .field("menu_count", &self.menu.read().len())
            .field("table_count", &self.tables.read().len())
            .field("room_count", &self.rooms.read().len())
            .field("online_order_count", &self.online_orders.read().len())
            .field("order_count", &self.orders.read().len())
            .finish()
    }
}
