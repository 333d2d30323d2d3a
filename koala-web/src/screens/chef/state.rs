//! Kitchen board state

use koala_client::{ErrorKind, HttpClient};
use shared::AppResult;
use shared::models::{DishDisplay, DishStatus};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct ChefScreen {
    pub dishes: Vec<DishDisplay>,
}

impl ChefScreen {
    /// Active dishes; the backend answers 404 when there are none
    pub async fn load(http: &HttpClient) -> AppResult<Self> {
        match http.chef().dishes().await {
            Ok(dishes) => Ok(Self { dishes }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply a status returned by the backend; ready dishes leave the board
    pub fn apply_status(&mut self, dish_id: Uuid, status: DishStatus) {
        if status.is_active() {
            if let Some(dish) = self.dishes.iter_mut().find(|d| d.dish_id == dish_id) {
                dish.dish_status = status;
            }
        } else {
            self.dishes.retain(|d| d.dish_id != dish_id);
        }
    }

    pub async fn advance(&mut self, http: &HttpClient, dish_id: Uuid) -> AppResult<DishStatus> {
        let status = http.chef().advance_dish(dish_id).await?;
        self.apply_status(dish_id, status);
        tracing::info!(%dish_id, %status, "Dish advanced");
        Ok(status)
    }
}
