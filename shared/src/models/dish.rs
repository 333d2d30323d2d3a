//! Kitchen Dish Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kitchen workflow status of a dish
///
/// The backend only moves a dish forward: received → prepared → ready.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DishStatus {
    Received,
    Prepared,
    Ready,
}

impl DishStatus {
    /// Status after the chef's next update, `None` once ready
    pub fn next(&self) -> Option<DishStatus> {
        match self {
            Self::Received => Some(Self::Prepared),
            Self::Prepared => Some(Self::Ready),
            Self::Ready => None,
        }
    }

    /// Button label for the chef's next step
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            Self::Received => Some("Prepare"),
            Self::Prepared => Some("Ready"),
            Self::Ready => None,
        }
    }

    /// Ready dishes leave the kitchen board
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Ready)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Prepared => "prepared",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for DishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dish row on the kitchen board (`GET /users/chef/dishes`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishDisplay {
    pub dish_id: Uuid,
    pub order_id: Uuid,
    pub table_id: u32,
    pub item_name: String,
    pub quantity: u32,
    pub dish_status: DishStatus,
}

/// Full dish row returned by `PUT /users/chef/dishes/status-update`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    pub dish_id: Uuid,
    pub order_id: Uuid,
    pub staff_id: Uuid,
    pub menu_item_id: Uuid,
    #[serde(default)]
    pub note: Option<String>,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub dish_status: DishStatus,
}

/// Payload of `PUT /users/chef/dishes/status-update`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishStatusUpdate {
    pub dish_id: Uuid,
}
