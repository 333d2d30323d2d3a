//! Table service endpoints

use crate::{ClientResult, HttpClient};
use serde::Deserialize;
use shared::models::{
    MenuItem, Order, OrderDetail, OrderDraft, OrderUpdate, Table, TableStatusUpdate,
};

/// `menu-items` has been served both as a bare array and wrapped in an object
#[derive(Deserialize)]
#[serde(untagged)]
enum MenuItemsPayload {
    List(Vec<MenuItem>),
    Wrapped {
        #[serde(rename = "menuItems", default)]
        menu_items: Vec<MenuItem>,
    },
}

impl From<MenuItemsPayload> for Vec<MenuItem> {
    fn from(payload: MenuItemsPayload) -> Self {
        match payload {
            MenuItemsPayload::List(items) | MenuItemsPayload::Wrapped { menu_items: items } => {
                items
            }
        }
    }
}

pub struct WaiterApi<'a> {
    http: &'a HttpClient,
}

impl<'a> WaiterApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn tables(&self) -> ClientResult<Vec<Table>> {
        self.http.get("/users/waiter/tables").await
    }

    pub async fn menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        let payload: MenuItemsPayload = self.http.get("/users/waiter/tables/menu-items").await?;
        Ok(payload.into())
    }

    /// Check a vacant table in; the backend returns it as `reserved`
    pub async fn reserve_table(&self, table_id: u32) -> ClientResult<Table> {
        self.http
            .put("/users/waiter/tables/reserve", &TableStatusUpdate { table_id })
            .await
    }

    /// Submit the draft; items left at zero are not sent
    pub async fn create_order(&self, table_id: u32, draft: &OrderDraft) -> ClientResult<Order> {
        self.http
            .post("/users/waiter/create-order", &draft.to_request(table_id))
            .await
    }

    pub async fn table_order(&self, table_id: u32) -> ClientResult<OrderDetail> {
        self.http
            .get(&format!("/users/waiter/tables/{}/order", table_id))
            .await
    }

    /// Mark the table's orders served and free the table
    pub async fn serve_order(&self, table_id: u32) -> ClientResult<Vec<OrderUpdate>> {
        self.http
            .put(
                &format!("/users/waiter/orders/{}/serve", table_id),
                &serde_json::json!({}),
            )
            .await
    }
}
