//! Menu administration state

use std::str::FromStr;

use koala_client::{ErrorKind, HttpClient};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{MenuItemCreate, MenuSectionWithItems};
use shared::{AppError, AppResult, ErrorCode};
use uuid::Uuid;

/// Submitted "add section" form
#[derive(Debug, Default, Deserialize)]
pub struct SectionForm {
    #[serde(default)]
    pub section_name: String,
}

/// Submitted add/edit item form; every field arrives as text
#[derive(Debug, Default, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub price: String,
    /// Present on the edit form only
    #[serde(default)]
    pub menu_section_id: Option<u32>,
}

impl ItemForm {
    /// Validate into a backend payload for the given section
    pub fn to_create(&self, menu_section_id: u32) -> AppResult<MenuItemCreate> {
        let item_name = self.item_name.trim();
        if item_name.is_empty() {
            return Err(AppError::required("Item name"));
        }

        let price = self.price.trim();
        if price.is_empty() {
            return Err(AppError::required("Price"));
        }
        let price = Decimal::from_str(price)
            .ok()
            .filter(|p| !p.is_sign_negative())
            .ok_or_else(|| {
                AppError::new(ErrorCode::MenuItemInvalidPrice).with_detail("price", price)
            })?;

        let note = self.note.trim();
        Ok(MenuItemCreate {
            item_name: item_name.to_string(),
            note: (!note.is_empty()).then(|| note.to_string()),
            price,
            menu_section_id,
        })
    }
}

#[derive(Debug, Default)]
pub struct ManagerScreen {
    pub sections: Vec<MenuSectionWithItems>,
}

impl ManagerScreen {
    /// Whole menu; the backend answers 404 when no section exists
    pub async fn load(http: &HttpClient) -> AppResult<Self> {
        match http.manager().menu_sections().await {
            Ok(sections) => Ok(Self { sections }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn reload(&mut self, http: &HttpClient) -> AppResult<()> {
        *self = Self::load(http).await?;
        Ok(())
    }

    pub async fn add_section(&mut self, http: &HttpClient, form: &SectionForm) -> AppResult<()> {
        let name = form.section_name.trim();
        if name.is_empty() {
            return Err(AppError::required("Section name"));
        }
        let section = http.manager().create_section(name).await?;
        tracing::info!(menu_section_id = section.menu_section_id, "Menu section created");
        self.reload(http).await
    }

    pub async fn add_item(
        &mut self,
        http: &HttpClient,
        menu_section_id: u32,
        form: &ItemForm,
    ) -> AppResult<()> {
        let item = form.to_create(menu_section_id)?;
        let created = http.manager().create_item(&item).await?;
        tracing::info!(menu_item_id = %created.menu_item_id, menu_section_id, "Menu item created");
        self.reload(http).await
    }

    pub async fn update_item(
        &mut self,
        http: &HttpClient,
        menu_item_id: Uuid,
        form: &ItemForm,
    ) -> AppResult<()> {
        let menu_section_id = form
            .menu_section_id
            .ok_or_else(|| AppError::required("Menu section"))?;
        let item = form.to_create(menu_section_id)?;
        http.manager().update_item(menu_item_id, &item).await?;
        tracing::info!(%menu_item_id, "Menu item updated");
        self.reload(http).await
    }

    pub async fn delete_item(&mut self, http: &HttpClient, menu_item_id: Uuid) -> AppResult<()> {
        http.manager().delete_item(menu_item_id).await?;
        tracing::info!(%menu_item_id, "Menu item deleted");
        self.reload(http).await
    }

    pub async fn delete_section(&mut self, http: &HttpClient, menu_section_id: u32) -> AppResult<()> {
        http.manager().delete_section(menu_section_id).await?;
        tracing::info!(menu_section_id, "Menu section deleted");
        self.reload(http).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str, note: &str) -> ItemForm {
        ItemForm {
            item_name: name.into(),
            note: note.into(),
            price: price.into(),
            menu_section_id: None,
        }
    }

    #[test]
    fn test_item_form_valid() {
        let item = form(" Laksa ", "12.50", "").to_create(3).unwrap();
        assert_eq!(item.item_name, "Laksa");
        assert_eq!(item.price, Decimal::new(1250, 2));
        assert_eq!(item.note, None);
        assert_eq!(item.menu_section_id, 3);
    }

    #[test]
    fn test_item_form_requires_name_and_price() {
        let err = form("", "5", "").to_create(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Item name is required");

        let err = form("Pho", "  ", "").to_create(1).unwrap_err();
        assert_eq!(err.message, "Price is required");
    }

    #[test]
    fn test_item_form_rejects_bad_price() {
        let err = form("Pho", "ten", "").to_create(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);

        let err = form("Pho", "-1", "").to_create(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
    }

    #[tokio::test]
    async fn test_blank_section_name_is_rejected_locally() {
        let http = HttpClient::with_client(
            reqwest::Client::new(),
            "http://127.0.0.1:9",
            koala_client::SessionContext::with_token("tok"),
        );
        let mut screen = ManagerScreen::default();
        let err = screen
            .add_section(&http, &SectionForm { section_name: "   ".into() })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }
}
