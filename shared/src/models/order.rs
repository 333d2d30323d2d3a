//! Order Models

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One line of an order as shown to the waiter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemDetail {
    pub item_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl OrderItemDetail {
    /// Price × quantity
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Open order of a table (`GET /users/waiter/tables/{id}/order`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    pub order_id: Uuid,
    pub items: Vec<OrderItemDetail>,
    pub created_at: NaiveDateTime,
    pub is_served: bool,
}

impl OrderDetail {
    /// Sum of every line's price × quantity
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItemDetail::line_total).sum()
    }
}

/// Order row returned by `POST /users/waiter/create-order`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: Uuid,
    pub table_id: u32,
    pub staff_id: Uuid,
    pub is_served: bool,
    pub created_at: NaiveDateTime,
}

/// Served flag update returned by `PUT /users/waiter/orders/{id}/serve`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderUpdate {
    pub order_id: Uuid,
    pub table_id: u32,
    pub is_served: bool,
}

/// Single dish line of a new order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishCreate {
    pub menu_item_id: Uuid,
    pub quantity: u32,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderWithDishesCreate {
    pub table_id: u32,
    pub dishes: Vec<DishCreate>,
}

/// Quantities picked by the waiter before an order is submitted
///
/// Keyed by menu item so each item appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    quantities: BTreeMap<Uuid, u32>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_quantity(&mut self, menu_item_id: Uuid, quantity: u32) {
        self.quantities.insert(menu_item_id, quantity);
    }

    pub fn increment(&mut self, menu_item_id: Uuid) {
        *self.quantities.entry(menu_item_id).or_insert(0) += 1;
    }

    /// Decrease by one, never below zero
    pub fn decrement(&mut self, menu_item_id: Uuid) {
        let quantity = self.quantities.entry(menu_item_id).or_insert(0);
        *quantity = quantity.saturating_sub(1);
    }

    pub fn quantity(&self, menu_item_id: &Uuid) -> u32 {
        self.quantities.get(menu_item_id).copied().unwrap_or(0)
    }

    /// True when at least one item has a quantity above zero
    pub fn has_selected_items(&self) -> bool {
        self.quantities.values().any(|&q| q > 0)
    }

    /// Build the backend payload for a table
    ///
    /// Zero quantities are left out, the backend rejects them.
    pub fn to_request(&self, table_id: u32) -> OrderWithDishesCreate {
        OrderWithDishesCreate {
            table_id,
            dishes: self
                .quantities
                .iter()
                .filter(|&(_, &quantity)| quantity > 0)
                .map(|(&menu_item_id, &quantity)| DishCreate {
                    menu_item_id,
                    quantity,
                })
                .collect(),
        }
    }
}
