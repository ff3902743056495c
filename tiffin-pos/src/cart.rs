//! Cart Aggregator
//!
//! Client-held mapping from menu item id to chosen quantity and item
//! snapshot. The map key makes duplicate lines impossible; the running
//! total is recomputed on every call using `Decimal` so float drift never
//! reaches a receipt.

use rust_decimal::prelude::*;
use shared::models::{MenuItem, OrderItem};
use std::collections::BTreeMap;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// One cart line: menu item snapshot plus chosen quantity
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub item: MenuItem,
    pub quantity: u32,
    /// Set by the waiter pad, absent on the customer page
    pub note_for_chef: Option<String>,
}

/// Client-side cart state, keyed by menu item id
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: BTreeMap<i64, CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the quantity for `item`, inserting a new line at 1
    pub fn add_item(&mut self, item: &MenuItem) {
        self.entries
            .entry(item.id)
            .and_modify(|e| e.quantity += 1)
            .or_insert_with(|| CartEntry {
                item: item.clone(),
                quantity: 1,
                note_for_chef: None,
            });
    }

    /// Attach a kitchen note to an existing line
    pub fn set_note(&mut self, item_id: i64, note: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(&item_id) {
            entry.note_for_chef = Some(note.into());
        }
    }

    /// Set the quantity for a line, removing it when `qty` is zero or less.
    /// The stored item snapshot is preserved. No upper bound is enforced.
    pub fn set_quantity(&mut self, item_id: i64, qty: i32) {
        if qty <= 0 {
            self.entries.remove(&item_id);
        } else if let Some(entry) = self.entries.get_mut(&item_id) {
            entry.quantity = qty as u32;
        }
    }

    /// Quantity currently chosen for a menu item, zero when absent
    pub fn quantity(&self, item_id: i64) -> u32 {
        self.entries.get(&item_id).map(|e| e.quantity).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Lines in menu-item-id order
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Running total: Σ price × quantity over all lines.
    /// Pure and recomputed on every call, never cached.
    pub fn total(&self) -> f64 {
        let sum = self
            .entries
            .values()
            .fold(Decimal::ZERO, |acc, e| {
                acc + to_decimal(e.item.price) * Decimal::from(e.quantity)
            });
        to_f64(sum)
    }

    /// Serialize the lines for an order payload, ordered by menu item id
    pub fn line_items(&self) -> Vec<OrderItem> {
        self.entries
            .values()
            .map(|e| OrderItem {
                id: e.item.id,
                name: e.item.name.clone(),
                qty: e.quantity,
                price: e.item.price,
                note_for_chef: e.note_for_chef.clone(),
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
