//! End-to-end walkthrough: browse the menu, fill a cart, check a coupon,
//! place the order and watch it land on the kitchen queue.
//!
//! ```text
//! RUST_LOG=debug cargo run -p tiffin-pos --example place_order
//! ```

use std::sync::Arc;
use tiffin_backend_mock::{MockBackend, MockConfig, PosBackend};
use tiffin_pos::{CouponStatus, OrderPad, menu_by_category};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let backend = Arc::new(MockBackend::new(MockConfig::from_env()));

    // Customer scans the QR code at table 7
    let menu = backend.list_menu_items().await?;
    println!("== Menu ==");
    for (category, items) in menu_by_category(&menu) {
        println!("{}", category);
        for item in items {
            println!("  {:<20} ₹{}", item.name, item.price);
        }
    }

    let mut pad = OrderPad::customer(backend.clone(), 7);
    for dish in ["Biryani", "Biryani", "Garlic Naan"] {
        if let Some(item) = menu.iter().find(|m| m.name == dish) {
            pad.cart_mut().add_item(item);
        }
    }

    pad.enter_coupon("SAVE10");
    match pad.coupon_status() {
        CouponStatus::Applied => println!("✅ Coupon applied! 10% discount"),
        CouponStatus::Invalid => println!("❌ Invalid coupon code"),
        CouponStatus::NotEntered => {}
    }

    println!("Cart total: ₹{}", pad.cart().total());

    match pad.submit().await {
        Ok(order) => println!("✅ Order placed successfully! Order ID: {}", order.id),
        Err(err) => println!("❌ Error placing order: {}", err.message()),
    }

    // Kitchen display picks the order up
    let kitchen = backend.list_kitchen_orders().await?;
    for order in &kitchen {
        println!(
            "👨‍🍳 table {}: {} lines, placed {}",
            order.table_number,
            order.items.len(),
            order.placed_at.format("%H:%M:%S")
        );
    }

    // Front desk prints the bill
    if let Some(order) = kitchen.first() {
        let invoice = backend.generate_invoice(&order.items).await?;
        println!("🧾 {}", invoice.invoice_id);
    }

    Ok(())
}
