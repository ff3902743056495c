//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Veg / non-veg marker printed next to a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VegMarker {
    #[default]
    Veg,
    NonVeg,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Price in currency unit
    pub price: f64,
    pub description: String,
    pub veg_marker: VegMarker,
    /// Kitchen preparation time in minutes
    pub prep_time_minutes: i32,
    pub is_active: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: Option<String>,
    pub veg_marker: Option<VegMarker>,
    pub prep_time_minutes: Option<i32>,
    pub is_active: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub veg_marker: Option<VegMarker>,
    pub prep_time_minutes: Option<i32>,
    pub is_active: Option<bool>,
}
