//! Menu administration endpoints

use crate::{ClientResult, HttpClient};
use shared::models::{MenuItem, MenuItemCreate, MenuSection, MenuSectionCreate, MenuSectionWithItems};
use uuid::Uuid;

pub struct ManagerApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ManagerApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn menu_sections(&self) -> ClientResult<Vec<MenuSectionWithItems>> {
        self.http.get("/users/manager/menu-sections").await
    }

    pub async fn create_section(&self, section_name: &str) -> ClientResult<MenuSection> {
        let body = MenuSectionCreate {
            section_name: section_name.to_string(),
        };
        self.http.post("/users/manager/menu-sections", &body).await
    }

    pub async fn create_item(&self, item: &MenuItemCreate) -> ClientResult<MenuItem> {
        self.http.post("/users/manager/menu-items", item).await
    }

    pub async fn delete_section(&self, menu_section_id: u32) -> ClientResult<()> {
        self.http
            .delete(&format!(
                "/users/manager/menu-sections/{}/delete",
                menu_section_id
            ))
            .await
    }

    pub async fn delete_item(&self, menu_item_id: Uuid) -> ClientResult<()> {
        self.http
            .delete(&format!("/users/manager/menu-items/{}/delete", menu_item_id))
            .await
    }

    pub async fn update_item(
        &self,
        menu_item_id: Uuid,
        item: &MenuItemCreate,
    ) -> ClientResult<MenuItem> {
        self.http
            .put(&format!("/users/manager/menu-items/{}", menu_item_id), item)
            .await
    }
}
