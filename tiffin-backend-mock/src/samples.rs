//! Sample datasets
//!
//! The fixed records the mock backend starts from. Disposable state: write
//! operations edit these in place and a restart reseeds them.

use chrono::NaiveDate;
use shared::models::{
    DiningTable, MenuItem, OnlineOrder, OnlineOrderStatus, Platform, Room, RoomStatus,
    TableStatus, VegMarker,
};

fn menu_item(
    id: i64,
    name: &str,
    category: &str,
    price: f64,
    description: &str,
    veg_marker: VegMarker,
    prep_time_minutes: i32,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        description: description.to_string(),
        veg_marker,
        prep_time_minutes,
        is_active: true,
    }
}

/// Ten-dish starter menu
pub fn sample_menu_items() -> Vec<MenuItem> {
    use VegMarker::{NonVeg, Veg};
    vec![
        menu_item(1, "Biryani", "Mains", 250.0, "Fragrant rice dish", NonVeg, 20),
        menu_item(2, "Butter Chicken", "Mains", 320.0, "Creamy chicken curry", NonVeg, 15),
        menu_item(3, "Dal Makhani", "Mains", 180.0, "Creamy lentil curry", Veg, 20),
        menu_item(4, "Garlic Naan", "Breads", 60.0, "Soft naan with garlic", Veg, 5),
        menu_item(5, "Paneer Tikka", "Appetizers", 200.0, "Grilled cottage cheese", Veg, 10),
        menu_item(6, "Samosa", "Appetizers", 80.0, "Crispy pastry with potato", Veg, 8),
        menu_item(7, "Gulab Jamun", "Desserts", 100.0, "Sweet milk solids", Veg, 12),
        menu_item(8, "Mango Lassi", "Beverages", 120.0, "Sweet yogurt drink", Veg, 3),
        menu_item(9, "Chole Bhature", "Mains", 180.0, "Chickpea curry with fried bread", Veg, 18),
        menu_item(10, "Tandoori Chicken", "Appetizers", 280.0, "Spiced grilled chicken", NonVeg, 25),
    ]
}

fn table(id: i64, number: i32, capacity: i32, status: TableStatus) -> DiningTable {
    DiningTable {
        id,
        name: format!("Table {}", number),
        number,
        capacity,
        status,
        current_bill: None,
    }
}

/// Six-table floor plan
pub fn sample_tables() -> Vec<DiningTable> {
    use TableStatus::{Available, NeedsCleaning, Occupied};
    vec![
        table(1, 1, 2, Available),
        table(2, 2, 4, Occupied),
        table(3, 3, 6, Available),
        table(4, 4, 2, NeedsCleaning),
        table(5, 5, 4, Available),
        table(6, 6, 8, Occupied),
    ]
}

fn vacant_room(id: i64, number: i32, status: RoomStatus) -> Room {
    Room {
        id,
        number,
        name: format!("Room {}", number),
        status,
        guest_name: None,
        check_in_date: None,
        check_out_date: None,
    }
}

fn occupied_room(id: i64, number: i32, guest: &str, check_in: (i32, u32, u32), check_out: (i32, u32, u32)) -> Room {
    Room {
        id,
        number,
        name: format!("Room {}", number),
        status: RoomStatus::Occupied,
        guest_name: Some(guest.to_string()),
        check_in_date: NaiveDate::from_ymd_opt(check_in.0, check_in.1, check_in.2),
        check_out_date: NaiveDate::from_ymd_opt(check_out.0, check_out.1, check_out.2),
    }
}

/// Six guest rooms, three occupied, one under maintenance
pub fn sample_rooms() -> Vec<Room> {
    vec![
        occupied_room(1, 101, "John Doe", (2025, 12, 6), (2025, 12, 8)),
        vacant_room(2, 102, RoomStatus::Available),
        occupied_room(3, 103, "Jane Smith", (2025, 12, 5), (2025, 12, 10)),
        vacant_room(4, 104, RoomStatus::Available),
        vacant_room(5, 105, RoomStatus::Maintenance),
        occupied_room(6, 106, "Bob Wilson", (2025, 12, 7), (2025, 12, 9)),
    ]
}

fn online_order(
    id: &str,
    platform: Platform,
    order_ref: &str,
    items: &[&str],
    total: f64,
    status: OnlineOrderStatus,
    customer_name: &str,
) -> OnlineOrder {
    OnlineOrder {
        id: id.to_string(),
        platform,
        order_ref: order_ref.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
        total,
        status,
        customer_name: customer_name.to_string(),
        delivery_time: None,
    }
}

/// Three aggregator orders in various stages
pub fn sample_online_orders() -> Vec<OnlineOrder> {
    use OnlineOrderStatus::{Delivered, Preparing, Ready};
    vec![
        online_order("1", Platform::Zomato, "5544", &["Biryani", "Naan", "Lassi"], 450.0, Delivered, "Arjun"),
        online_order("2", Platform::Swiggy, "7823", &["Butter Chicken", "Rice"], 520.0, Ready, "Priya"),
        online_order("3", Platform::Zomato, "6201", &["Dal Makhani", "Naan", "Samosa"], 380.0, Preparing, "Vikram"),
    ]
}
