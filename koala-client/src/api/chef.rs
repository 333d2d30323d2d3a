//! Kitchen endpoints

use crate::{ClientResult, HttpClient};
use shared::models::{Dish, DishDisplay, DishStatus, DishStatusUpdate};
use uuid::Uuid;

pub struct ChefApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ChefApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Dishes still in the kitchen; `ready` ones are dropped
    pub async fn dishes(&self) -> ClientResult<Vec<DishDisplay>> {
        let dishes: Vec<DishDisplay> = self.http.get("/users/chef/dishes").await?;
        Ok(dishes
            .into_iter()
            .filter(|d| d.dish_status.is_active())
            .collect())
    }

    /// Move a dish one step forward and return its new status
    pub async fn advance_dish(&self, dish_id: Uuid) -> ClientResult<DishStatus> {
        let dish: Dish = self
            .http
            .put("/users/chef/dishes/status-update", &DishStatusUpdate { dish_id })
            .await?;
        Ok(dish.dish_status)
    }
}
