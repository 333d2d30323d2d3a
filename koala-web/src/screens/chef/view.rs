//! Kitchen board rendering

use axum::response::{IntoResponse, Response};
use shared::{AppError, Role};

use super::state::ChefScreen;
use crate::screens::layout::{escape, page};

pub fn dishes(screen: &ChefScreen, error: Option<&AppError>) -> Response {
    let mut rows = String::new();
    for dish in &screen.dishes {
        let action = match dish.dish_status.action_label() {
            Some(label) => format!(
                "<form method=\"post\" action=\"/home/chef/dishes/{}/advance\"><button type=\"submit\">{label}</button></form>",
                dish.dish_id
            ),
            None => String::new(),
        };
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{action}</td></tr>",
            dish.table_id,
            escape(&dish.item_name),
            dish.quantity,
            dish.dish_status,
        ));
    }

    let body = if rows.is_empty() {
        "<p>No dishes waiting.</p>".to_string()
    } else {
        format!(
            "<table class=\"list\"><tr><th>Table</th><th>Dish</th><th>Qty</th><th>Status</th><th></th></tr>{rows}</table>"
        )
    };
    page("Kitchen", Some(Role::Chef), error, &body).into_response()
}
