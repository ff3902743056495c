//! Backend service contract
//!
//! The seam between the page-level front-ends and whatever fulfils their
//! data: today the in-memory mock, later a real backend speaking HTTP.
//! Every operation takes plain data and resolves, after whatever latency
//! the implementation adds, to plain data or an error message.

use async_trait::async_trait;
use shared::AppResult;
use shared::models::{
    DiningTable, DiningTableCreate, GuestCheckIn, Invoice, MenuItem, MenuItemCreate,
    MenuItemUpdate, OnlineOrder, OnlineOrderStatus, Order, OrderItem, OrderPayload, Room,
    TableOrderDetail, TableStatus,
};

/// Asynchronous POS backend operations
#[async_trait]
pub trait PosBackend: Send + Sync {
    // ========================================================================
    // Menu management
    // ========================================================================

    /// Full menu snapshot, inactive items included
    async fn list_menu_items(&self) -> AppResult<Vec<MenuItem>>;

    /// Add a menu item; the backend assigns the id
    async fn add_menu_item(&self, payload: MenuItemCreate) -> AppResult<MenuItem>;

    /// Merge the given fields into an existing item.
    /// Resolves to `None` when the id is unknown.
    async fn update_menu_item(
        &self,
        id: i64,
        payload: MenuItemUpdate,
    ) -> AppResult<Option<MenuItem>>;

    /// Flip an item's availability without removing it from the catalog
    async fn set_menu_item_active(&self, id: i64, active: bool) -> AppResult<()>;

    /// Remove an item from the catalog
    async fn delete_menu_item(&self, id: i64) -> AppResult<()>;

    // ========================================================================
    // Table management
    // ========================================================================

    async fn list_tables(&self) -> AppResult<Vec<DiningTable>>;

    /// Current order detail for a table, `None` when the table is unknown
    async fn table_order_detail(&self, table_id: i64) -> AppResult<Option<TableOrderDetail>>;

    async fn update_table_status(&self, table_id: i64, status: TableStatus) -> AppResult<()>;

    /// Add a table; the backend assigns the id
    async fn add_table(&self, payload: DiningTableCreate) -> AppResult<DiningTable>;

    // ========================================================================
    // Room management
    // ========================================================================

    async fn list_rooms(&self) -> AppResult<Vec<Room>>;

    /// Check a guest in: room goes occupied and carries the guest fields
    async fn check_in_guest(&self, payload: GuestCheckIn) -> AppResult<()>;

    /// Check a guest out: room goes available and the guest fields clear
    async fn check_out_guest(&self, room_id: i64) -> AppResult<()>;

    // ========================================================================
    // Online orders
    // ========================================================================

    async fn list_online_orders(&self) -> AppResult<Vec<OnlineOrder>>;

    async fn update_online_order_status(
        &self,
        order_id: &str,
        status: OnlineOrderStatus,
    ) -> AppResult<()>;

    // ========================================================================
    // Dine-in orders
    // ========================================================================

    /// Place an order from the customer menu page
    async fn place_customer_order(&self, payload: OrderPayload) -> AppResult<Order>;

    /// Place an order entered by a waiter
    async fn place_waiter_order(&self, payload: OrderPayload) -> AppResult<Order>;

    /// Orders the kitchen still has to move through the pass
    async fn list_kitchen_orders(&self) -> AppResult<Vec<Order>>;

    async fn list_all_orders(&self) -> AppResult<Vec<Order>>;

    // ========================================================================
    // Billing
    // ========================================================================

    /// Generate an invoice identifier for the given lines
    async fn generate_invoice(&self, items: &[OrderItem]) -> AppResult<Invoice>;
}
