//! Order submission flow tests
//!
//! Drive the order pad against the zero-latency mock backend, plus a
//! permanently failing backend double for the error path.

use async_trait::async_trait;
use shared::AppResult;
use shared::models::{
    DiningTable, DiningTableCreate, GuestCheckIn, Invoice, MenuItem, MenuItemCreate,
    MenuItemUpdate, OnlineOrder, OnlineOrderStatus, Order, OrderItem, OrderPayload, Room,
    TableOrderDetail, TableStatus,
};
use shared::{AppError, models::VegMarker};
use std::sync::Arc;
use tiffin_backend_mock::{MockBackend, MockConfig, PosBackend};
use tiffin_pos::{CouponStatus, OrderPad};

fn mock() -> Arc<MockBackend> {
    Arc::new(MockBackend::new(MockConfig::instant()))
}

fn menu_item(id: i64, name: &str, price: f64) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        category: "Mains".to_string(),
        price,
        description: String::new(),
        veg_marker: VegMarker::Veg,
        prep_time_minutes: 10,
        is_active: true,
    }
}

/// Backend double whose every operation fails with the same message
struct OfflineBackend;

const OFFLINE: &str = "backend offline";

#[async_trait]
impl PosBackend for OfflineBackend {
    async fn list_menu_items(&self) -> AppResult<Vec<MenuItem>> {
        Err(AppError::backend(OFFLINE))
    }
    async fn add_menu_item(&self, _: MenuItemCreate) -> AppResult<MenuItem> {
        Err(AppError::backend(OFFLINE))
    }
    async fn update_menu_item(&self, _: i64, _: MenuItemUpdate) -> AppResult<Option<MenuItem>> {
        Err(AppError::backend(OFFLINE))
    }
    async fn set_menu_item_active(&self, _: i64, _: bool) -> AppResult<()> {
        Err(AppError::backend(OFFLINE))
    }
    async fn delete_menu_item(&self, _: i64) -> AppResult<()> {
        Err(AppError::backend(OFFLINE))
    }
    async fn list_tables(&self) -> AppResult<Vec<DiningTable>> {
        Err(AppError::backend(OFFLINE))
    }
    async fn table_order_detail(&self, _: i64) -> AppResult<Option<TableOrderDetail>> {
        Err(AppError::backend(OFFLINE))
    }
    async fn update_table_status(&self, _: i64, _: TableStatus) -> AppResult<()> {
        Err(AppError::backend(OFFLINE))
    }
    async fn add_table(&self, _: DiningTableCreate) -> AppResult<DiningTable> {
        Err(AppError::backend(OFFLINE))
    }
    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        Err(AppError::backend(OFFLINE))
    }
    async fn check_in_guest(&self, _: GuestCheckIn) -> AppResult<()> {
        Err(AppError::backend(OFFLINE))
    }
    async fn check_out_guest(&self, _: i64) -> AppResult<()> {
        Err(AppError::backend(OFFLINE))
    }
    async fn list_online_orders(&self) -> AppResult<Vec<OnlineOrder>> {
        Err(AppError::backend(OFFLINE))
    }
    async fn update_online_order_status(&self, _: &str, _: OnlineOrderStatus) -> AppResult<()> {
        Err(AppError::backend(OFFLINE))
    }
    async fn place_customer_order(&self, _: OrderPayload) -> AppResult<Order> {
        Err(AppError::backend(OFFLINE))
    }
    async fn place_waiter_order(&self, _: OrderPayload) -> AppResult<Order> {
        Err(AppError::backend(OFFLINE))
    }
    async fn list_kitchen_orders(&self) -> AppResult<Vec<Order>> {
        Err(AppError::backend(OFFLINE))
    }
    async fn list_all_orders(&self) -> AppResult<Vec<Order>> {
        Err(AppError::backend(OFFLINE))
    }
    async fn generate_invoice(&self, _: &[OrderItem]) -> AppResult<Invoice> {
        Err(AppError::backend(OFFLINE))
    }
}

#[tokio::test]
async fn empty_cart_fails_fast_without_reaching_the_backend() {
    let backend = mock();
    let mut pad = OrderPad::customer(backend.clone(), 7);

    let err = pad.submit().await.unwrap_err();
    assert_eq!(err.message(), "Please add items to cart");

    // The placement operation was never invoked
    assert!(backend.list_all_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn successful_submission_clears_cart_and_coupon() {
    let backend = mock();
    let mut pad = OrderPad::customer(backend.clone(), 7);

    let biryani = menu_item(1, "Biryani", 250.0);
    let naan = menu_item(4, "Garlic Naan", 60.0);
    pad.cart_mut().add_item(&biryani);
    pad.cart_mut().add_item(&biryani);
    pad.cart_mut().add_item(&naan);
    pad.enter_coupon("SAVE10");

    assert_eq!(pad.cart().total(), 560.0);

    let placed = pad.submit().await.unwrap();
    assert!(placed.id.starts_with("ORD-"));
    assert_eq!(placed.table_number, 7);
    assert_eq!(placed.items.len(), 2);

    assert!(pad.cart().is_empty());
    assert!(pad.coupon_code().is_empty());
    assert_eq!(pad.coupon_status(), CouponStatus::NotEntered);

    let all = backend.list_all_orders().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, placed.id);
}

#[tokio::test]
async fn failed_submission_leaves_local_state_untouched() {
    let mut pad = OrderPad::customer(Arc::new(OfflineBackend), 4);
    pad.cart_mut().add_item(&menu_item(1, "Biryani", 250.0));
    pad.enter_coupon("SAVE10");

    let err = pad.submit().await.unwrap_err();
    assert_eq!(err.message(), OFFLINE);

    assert_eq!(pad.cart().len(), 1);
    assert_eq!(pad.cart().total(), 250.0);
    assert_eq!(pad.coupon_code(), "SAVE10");
}

#[tokio::test]
async fn waiter_channel_routes_to_the_waiter_operation() {
    let backend = mock();
    let mut pad = OrderPad::waiter(backend.clone(), 2);
    pad.cart_mut().add_item(&menu_item(5, "Paneer Tikka", 200.0));
    pad.cart_mut().set_note(5, "extra spicy");

    let placed = pad.submit().await.unwrap();
    assert_eq!(placed.items[0].note_for_chef.as_deref(), Some("extra spicy"));

    let kitchen = backend.list_kitchen_orders().await.unwrap();
    assert_eq!(kitchen.len(), 1);
}

#[tokio::test]
async fn payload_carries_the_coupon_only_when_entered() {
    let backend = mock();
    let mut pad = OrderPad::customer(backend, 7);
    pad.cart_mut().add_item(&menu_item(1, "Biryani", 250.0));

    assert_eq!(pad.build_payload().coupon_code, None);

    pad.enter_coupon("WELCOME5");
    let payload = pad.build_payload();
    assert_eq!(payload.coupon_code.as_deref(), Some("WELCOME5"));
    assert_eq!(payload.table_number, 7);
    assert_eq!(payload.total, 250.0);
}

#[tokio::test]
async fn coupon_status_follows_the_entered_code() {
    let backend = mock();
    let mut pad = OrderPad::customer(backend, 7);

    assert_eq!(pad.coupon_status(), CouponStatus::NotEntered);
    pad.enter_coupon("SAVE10");
    assert_eq!(pad.coupon_status(), CouponStatus::Applied);
    pad.enter_coupon("SAVE99");
    assert_eq!(pad.coupon_status(), CouponStatus::Invalid);
}

#[tokio::test]
async fn coupon_acknowledgement_never_changes_the_total() {
    let backend = mock();
    let mut pad = OrderPad::customer(backend, 7);
    pad.cart_mut().add_item(&menu_item(1, "Biryani", 250.0));

    let before = pad.cart().total();
    pad.enter_coupon("SAVE10");
    assert_eq!(pad.coupon_status(), CouponStatus::Applied);
    assert_eq!(pad.cart().total(), before);
    assert_eq!(pad.build_payload().total, before);
}
