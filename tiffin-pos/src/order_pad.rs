//! Order Pad
//!
//! The page-level flow shared by the customer menu page and the waiter
//! order page: hold a table number, a cart and an entered coupon code,
//! then submit through the backend seam. On success the local state is
//! cleared wholesale; on failure the backend's message is surfaced once
//! and the state is left untouched. No retries.

use crate::cart::Cart;
use crate::coupon::{CouponStatus, check_coupon};
use shared::models::{Order, OrderPayload};
use shared::{AppError, AppResult};
use std::sync::Arc;
use tiffin_backend_mock::PosBackend;

/// Which placement operation the pad drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderChannel {
    /// Self-service from the customer menu page
    Customer,
    /// Entered by a waiter at the table
    Waiter,
}

/// One in-progress order being assembled against a table
pub struct OrderPad {
    backend: Arc<dyn PosBackend>,
    channel: OrderChannel,
    table_number: i32,
    cart: Cart,
    coupon_code: String,
}

impl OrderPad {
    /// Pad for the customer menu page
    pub fn customer(backend: Arc<dyn PosBackend>, table_number: i32) -> Self {
        Self::new(backend, OrderChannel::Customer, table_number)
    }

    /// Pad for the waiter order page
    pub fn waiter(backend: Arc<dyn PosBackend>, table_number: i32) -> Self {
        Self::new(backend, OrderChannel::Waiter, table_number)
    }

    fn new(backend: Arc<dyn PosBackend>, channel: OrderChannel, table_number: i32) -> Self {
        Self {
            backend,
            channel,
            table_number,
            cart: Cart::new(),
            coupon_code: String::new(),
        }
    }

    pub fn channel(&self) -> OrderChannel {
        self.channel
    }

    pub fn table_number(&self) -> i32 {
        self.table_number
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Store whatever the user typed into the coupon field
    pub fn enter_coupon(&mut self, code: impl Into<String>) {
        self.coupon_code = code.into();
    }

    pub fn coupon_code(&self) -> &str {
        &self.coupon_code
    }

    /// Check the entered code; acknowledgement only, the total is untouched
    pub fn coupon_status(&self) -> CouponStatus {
        check_coupon(&self.coupon_code)
    }

    /// Serialize the current cart into a submission payload
    pub fn build_payload(&self) -> OrderPayload {
        OrderPayload {
            table_number: self.table_number,
            items: self.cart.line_items(),
            coupon_code: if self.coupon_code.is_empty() {
                None
            } else {
                Some(self.coupon_code.clone())
            },
            total: self.cart.total(),
        }
    }

    /// Submit the cart as an order.
    ///
    /// Fails fast without reaching the backend when the cart is empty.
    /// On success the cart and the coupon field are cleared; on failure
    /// both are left exactly as they were.
    pub async fn submit(&mut self) -> AppResult<Order> {
        if self.cart.is_empty() {
            return Err(AppError::validation("Please add items to cart"));
        }

        let payload = self.build_payload();
        let placed = match self.channel {
            OrderChannel::Customer => self.backend.place_customer_order(payload).await,
            OrderChannel::Waiter => self.backend.place_waiter_order(payload).await,
        }?;

        tracing::info!(
            "✅ order {} placed for table {}",
            placed.id,
            placed.table_number
        );
        self.cart.clear();
        self.coupon_code.clear();
        Ok(placed)
    }
}
