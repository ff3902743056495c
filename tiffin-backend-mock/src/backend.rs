//! Mock backend implementation
//!
//! Each operation sleeps the configured latency, logs, then reads or
//! mutates the shared sample collections. Update-style calls against an
//! unknown id are a successful no-op; add/place-style calls synthesize a
//! timestamp-derived identifier. There is no simulated failure path.

use crate::config::MockConfig;
use crate::service::PosBackend;
use crate::store::SampleStore;
use async_trait::async_trait;
use chrono::Utc;
use shared::AppResult;
use shared::models::{
    ActivityKind, DiningTable, DiningTableCreate, GuestCheckIn, Invoice, MenuItem,
    MenuItemCreate, MenuItemUpdate, OnlineOrder, OnlineOrderStatus, Order, OrderItem,
    OrderPayload, OrderStatus, Room, RoomStatus, TableOrderDetail, TableStatus,
};
use shared::util::{invoice_id, order_id, snowflake_id};
use std::time::Duration;

/// In-memory [`PosBackend`] over a [`SampleStore`]
#[derive(Debug, Clone)]
pub struct MockBackend {
    store: SampleStore,
    config: MockConfig,
}

impl MockBackend {
    /// Backend over a freshly seeded store
    pub fn new(config: MockConfig) -> Self {
        Self {
            store: SampleStore::seeded(),
            config,
        }
    }

    /// Backend over an existing store (several handles may share one)
    pub fn with_store(store: SampleStore, config: MockConfig) -> Self {
        Self { store, config }
    }

    /// The store behind this handle
    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    async fn read_delay(&self) {
        tokio::time::sleep(Duration::from_millis(self.config.read_delay_ms)).await;
    }

    async fn write_delay(&self) {
        tokio::time::sleep(Duration::from_millis(self.config.write_delay_ms)).await;
    }

    fn place_order(&self, payload: OrderPayload, source: &str) -> Order {
        let order = Order {
            id: order_id(),
            table_number: payload.table_number,
            items: payload.items,
            status: OrderStatus::Placed,
            placed_at: Utc::now(),
        };
        tracing::info!(
            "🛒 {} order {} placed for table {} ({} lines, total {})",
            source,
            order.id,
            order.table_number,
            order.items.len(),
            payload.total,
        );
        self.store.record_activity(
            ActivityKind::Order,
            format!("Order {} placed for table {}", order.id, order.table_number),
        );
        self.store.orders.write().push(order.clone());
        order
    }
}

#[async_trait]
impl PosBackend for MockBackend {
    // ========================================================================
    // Menu management
    // ========================================================================

    async fn list_menu_items(&self) -> AppResult<Vec<MenuItem>> {
        self.read_delay().await;
        tracing::debug!("📋 fetching menu items");
        Ok(self.store.menu.read().clone())
    }

    async fn add_menu_item(&self, payload: MenuItemCreate) -> AppResult<MenuItem> {
        self.write_delay().await;
        let item = MenuItem {
            id: snowflake_id(),
            name: payload.name,
            category: payload.category,
            price: payload.price,
            description: payload.description.unwrap_or_default(),
            veg_marker: payload.veg_marker.unwrap_or_default(),
            prep_time_minutes: payload.prep_time_minutes.unwrap_or(15),
            is_active: payload.is_active.unwrap_or(true),
        };
        tracing::info!("📋 menu item '{}' added as {}", item.name, item.id);
        self.store.menu.write().push(item.clone());
        Ok(item)
    }

    async fn update_menu_item(
        &self,
        id: i64,
        payload: MenuItemUpdate,
    ) -> AppResult<Option<MenuItem>> {
        self.write_delay().await;
        tracing::info!("📋 updating menu item {}", id);
        let mut menu = self.store.menu.write();
        let Some(item) = menu.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        if let Some(name) = payload.name {
            item.name = name;
        }
        if let Some(category) = payload.category {
            item.category = category;
        }
        if let Some(price) = payload.price {
            item.price = price;
        }
        if let Some(description) = payload.description {
            item.description = description;
        }
        if let Some(veg_marker) = payload.veg_marker {
            item.veg_marker = veg_marker;
        }
        if let Some(prep) = payload.prep_time_minutes {
            item.prep_time_minutes = prep;
        }
        if let Some(active) = payload.is_active {
            item.is_active = active;
        }
        Ok(Some(item.clone()))
    }

    async fn set_menu_item_active(&self, id: i64, active: bool) -> AppResult<()> {
        self.write_delay().await;
        tracing::info!("📋 setting menu item {} active={}", id, active);
        if let Some(item) = self.store.menu.write().iter_mut().find(|m| m.id == id) {
            item.is_active = active;
        }
        Ok(())
    }

    async fn delete_menu_item(&self, id: i64) -> AppResult<()> {
        self.write_delay().await;
        tracing::info!("📋 deleting menu item {}", id);
        self.store.menu.write().retain(|m| m.id != id);
        Ok(())
    }

    // ========================================================================
    // Table management
    // ========================================================================

    async fn list_tables(&self) -> AppResult<Vec<DiningTable>> {
        self.read_delay().await;
        tracing::debug!("🪑 fetching tables");
        Ok(self.store.tables.read().clone())
    }

    async fn table_order_detail(&self, table_id: i64) -> AppResult<Option<TableOrderDetail>> {
        self.read_delay().await;
        tracing::debug!("🪑 fetching order detail for table {}", table_id);
        let known = self.store.tables.read().iter().any(|t| t.id == table_id);
        if !known {
            return Ok(None);
        }
        // Static sample detail, same for every table
        let items = vec![
            OrderItem {
                id: 1,
                name: "Biryani".to_string(),
                qty: 2,
                price: 250.0,
                note_for_chef: None,
            },
            OrderItem {
                id: 4,
                name: "Naan".to_string(),
                qty: 3,
                price: 60.0,
                note_for_chef: None,
            },
        ];
        Ok(Some(TableOrderDetail {
            table_id,
            total: items.iter().map(|i| i.price * i.qty as f64).sum(),
            items,
        }))
    }

    async fn update_table_status(&self, table_id: i64, status: TableStatus) -> AppResult<()> {
        self.write_delay().await;
        tracing::info!("🪑 updating table {} status to {:?}", table_id, status);
        let mut tables = self.store.tables.write();
        if let Some(table) = tables.iter_mut().find(|t| t.id == table_id) {
            table.status = status;
            if status == TableStatus::NeedsCleaning {
                self.store.record_activity(
                    ActivityKind::Cleaning,
                    format!("{} marked for cleaning", table.name),
                );
            }
        }
        Ok(())
    }

    async fn add_table(&self, payload: DiningTableCreate) -> AppResult<DiningTable> {
        self.write_delay().await;
        let table = DiningTable {
            id: snowflake_id(),
            name: payload
                .name
                .unwrap_or_else(|| format!("Table {}", payload.number)),
            number: payload.number,
            capacity: payload.capacity.unwrap_or(4),
            status: TableStatus::Available,
            current_bill: None,
        };
        tracing::info!("🪑 table '{}' added as {}", table.name, table.id);
        self.store.tables.write().push(table.clone());
        Ok(table)
    }

    // ========================================================================
    // Room management
    // ========================================================================

    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        self.read_delay().await;
        tracing::debug!("🛏️ fetching rooms");
        Ok(self.store.rooms.read().clone())
    }

    async fn check_in_guest(&self, payload: GuestCheckIn) -> AppResult<()> {
        self.write_delay().await;
        tracing::info!(
            "🛏️ checking guest '{}' in to room {}",
            payload.guest_name,
            payload.room_id
        );
        let mut rooms = self.store.rooms.write();
        if let Some(room) = rooms.iter_mut().find(|r| r.id == payload.room_id) {
            room.status = RoomStatus::Occupied;
            room.guest_name = Some(payload.guest_name.clone());
            room.check_in_date = Some(payload.check_in_date);
            room.check_out_date = Some(payload.check_out_date);
            self.store.record_activity(
                ActivityKind::Checkin,
                format!("{} checked in to {}", payload.guest_name, room.name),
            );
        }
        Ok(())
    }

    async fn check_out_guest(&self, room_id: i64) -> AppResult<()> {
        self.write_delay().await;
        tracing::info!("🛏️ checking guest out of room {}", room_id);
        let mut rooms = self.store.rooms.write();
        if let Some(room) = rooms.iter_mut().find(|r| r.id == room_id) {
            room.status = RoomStatus::Available;
            if let Some(guest) = room.guest_name.take() {
                self.store.record_activity(
                    ActivityKind::Checkout,
                    format!("{} checked out of {}", guest, room.name),
                );
            }
            room.check_in_date = None;
            room.check_out_date = None;
        }
        Ok(())
    }

    // ========================================================================
    // Online orders
    // ========================================================================

    async fn list_online_orders(&self) -> AppResult<Vec<OnlineOrder>> {
        self.read_delay().await;
        tracing::debug!("🛵 fetching online orders");
        Ok(self.store.online_orders.read().clone())
    }

    async fn update_online_order_status(
        &self,
        order_id: &str,
        status: OnlineOrderStatus,
    ) -> AppResult<()> {
        self.write_delay().await;
        tracing::info!("🛵 updating online order {} status to {:?}", order_id, status);
        if let Some(order) = self
            .store
            .online_orders
            .write()
            .iter_mut()
            .find(|o| o.id == order_id)
        {
            order.status = status;
        }
        Ok(())
    }

    // ========================================================================
    // Dine-in orders
    // ========================================================================

    async fn place_customer_order(&self, payload: OrderPayload) -> AppResult<Order> {
        self.write_delay().await;
        Ok(self.place_order(payload, "customer"))
    }

    async fn place_waiter_order(&self, payload: OrderPayload) -> AppResult<Order> {
        self.write_delay().await;
        Ok(self.place_order(payload, "waiter"))
    }

    async fn list_kitchen_orders(&self) -> AppResult<Vec<Order>> {
        self.read_delay().await;
        tracing::debug!("👨‍🍳 fetching kitchen orders");
        Ok(self
            .store
            .orders
            .read()
            .iter()
            .filter(|o| o.status != OrderStatus::Served)
            .cloned()
            .collect())
    }

    async fn list_all_orders(&self) -> AppResult<Vec<Order>> {
        self.read_delay().await;
        tracing::debug!("📋 fetching all orders");
        Ok(self.store.orders.read().clone())
    }

    // ========================================================================
    // Billing
    // ========================================================================

    async fn generate_invoice(&self, items: &[OrderItem]) -> AppResult<Invoice> {
        self.write_delay().await;
        let invoice = Invoice {
            invoice_id: invoice_id(),
            generated_at: Utc::now(),
        };
        tracing::info!("🧾 invoice {} generated ({} lines)", invoice.invoice_id, items.len());
        self.store.record_activity(
            ActivityKind::Bill,
            format!("Invoice {} generated", invoice.invoice_id),
        );
        Ok(invoice)
    }
}
