//! Menu Models
//!
//! The waiter reads a flat item list, the manager reads sections with their
//! items nested.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Menu item as listed to the waiter (`GET /users/waiter/tables/menu-items`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub menu_item_id: Uuid,
    pub menu_section_id: u32,
    pub item_name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Menu item nested inside a [`MenuSectionWithItems`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionItem {
    pub menu_item_id: Uuid,
    pub item_name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Menu section with its ordered item list (`GET /users/manager/menu-sections`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuSectionWithItems {
    pub menu_section_id: u32,
    pub section_name: String,
    #[serde(default)]
    pub menu_items: Vec<SectionItem>,
}

/// Menu section without items, returned when a section is created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuSection {
    pub menu_section_id: u32,
    pub section_name: String,
}

/// Create menu section payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSectionCreate {
    pub section_name: String,
}

/// Create/update menu item payload
///
/// The backend uses the same shape for `POST /users/manager/menu-items` and
/// `PUT /users/manager/menu-items/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItemCreate {
    pub item_name: String,
    pub note: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub menu_section_id: u32,
}
