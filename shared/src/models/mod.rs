//! Data models
//!
//! Shared between the mock backend and the page-level front-ends.
//! All catalog IDs are `i64`; identifiers synthesized at order time
//! (`ORD-…`, `INV-…`) are strings.

pub mod activity;
pub mod dining_table;
pub mod menu_item;
pub mod online_order;
pub mod order;
pub mod room;

// Re-exports
pub use activity::*;
pub use dining_table::*;
pub use menu_item::*;
pub use online_order::*;
pub use order::*;
pub use room::*;
