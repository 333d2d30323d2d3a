//! Waiter screen rendering

use axum::response::{IntoResponse, Response};
use shared::models::{Table, TableStatus};
use shared::{AppError, Role};

use super::state::{OrderForm, OrderView, QUANTITY_FIELD, WaiterScreen};
use crate::screens::layout::{escape, page};

const BASE: &str = "/home/waiter";

fn table_cell(table: &Table) -> String {
    let id = table.table_id;
    let status = table.table_status;
    let label = status.action_label();
    let action = match status {
        TableStatus::Vacant => format!(
            "<form method=\"post\" action=\"{BASE}/tables/{id}/check-in\"><button type=\"submit\">{label}</button></form>"
        ),
        TableStatus::Reserved => {
            format!("<a href=\"{BASE}/tables/{id}/order/new\">{label}</a>")
        }
        TableStatus::Eating => format!("<a href=\"{BASE}/tables/{id}/order\">{label}</a>"),
    };
    format!(
        "<td><strong>Table {id}</strong><br>Seats {}<br><span class=\"{status}\">{status}</span><p>{action}</p></td>",
        table.capacity
    )
}

pub fn tables(screen: &WaiterScreen, error: Option<&AppError>) -> Response {
    let mut body = String::new();
    if screen.tables.is_empty() {
        body.push_str("<p>No tables.</p>");
    } else {
        body.push_str("<table class=\"grid\">");
        for row in screen.rows() {
            body.push_str("<tr>");
            for cell in row {
                match cell {
                    Some(table) => body.push_str(&table_cell(table)),
                    None => body.push_str("<td class=\"empty\"></td>"),
                }
            }
            body.push_str("</tr>");
        }
        body.push_str("</table>");
    }
    page("Tables", Some(Role::Waiter), error, &body).into_response()
}

pub fn order_form(form: &OrderForm, error: Option<&AppError>) -> Response {
    let table_id = form.table_id;
    let mut rows = String::new();
    for item in &form.menu {
        let id = item.menu_item_id;
        let quantity = form.draft.quantity(&id);
        let note = item.note.as_deref().map(escape).unwrap_or_default();
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{note}</td><td>{}</td><td>\
<button type=\"submit\" name=\"op\" value=\"dec:{id}\" formaction=\"{BASE}/tables/{table_id}/order/new\">-</button> \
<input name=\"{QUANTITY_FIELD}{id}\" type=\"number\" min=\"0\" value=\"{quantity}\" size=\"3\"> \
<button type=\"submit\" name=\"op\" value=\"inc:{id}\" formaction=\"{BASE}/tables/{table_id}/order/new\">+</button>\
</td></tr>",
            escape(&item.item_name),
            item.price,
        ));
    }
    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"4\">The menu is empty.</td></tr>");
    }

    let body = format!(
        "<form method=\"post\" action=\"{BASE}/tables/{table_id}/order\">\
<table class=\"list\"><tr><th>Dish</th><th>Note</th><th>Price</th><th>Quantity</th></tr>{rows}</table>\
<p>Total: {}</p>\
<p><button type=\"submit\">Submit order</button> <a href=\"{BASE}\">Cancel</a></p>\
</form>",
        form.draft_total()
    );
    page(&format!("Order for table {}", table_id), Some(Role::Waiter), error, &body).into_response()
}

pub fn order_detail(view: &OrderView, error: Option<&AppError>) -> Response {
    let table_id = view.table_id;
    let order = &view.order;
    let mut rows = String::new();
    for item in &order.items {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&item.item_name),
            item.quantity,
            item.price,
            item.line_total()
        ));
    }
    let body = format!(
        "<p>Order {} placed at {}</p>\
<p>Served: {}</p>\
<table class=\"list\"><tr><th>Dish</th><th>Quantity</th><th>Price</th><th>Subtotal</th></tr>{rows}</table>\
<p><strong>Total: {}</strong></p>\
<form method=\"post\" action=\"{BASE}/tables/{table_id}/payment\"><button type=\"submit\">Make Payment</button></form>\
<p><a href=\"{BASE}\">Back to tables</a></p>",
        order.order_id,
        order.created_at.format("%Y-%m-%d %H:%M"),
        if order.is_served { "yes" } else { "no" },
        order.total()
    );
    page(&format!("Table {}", table_id), Some(Role::Waiter), error, &body).into_response()
}

/// Order page when the order could not be fetched
pub fn order_unavailable(table_id: u32, error: &AppError) -> Response {
    let body = format!("<p><a href=\"{BASE}\">Back to tables</a></p>");
    page(&format!("Table {}", table_id), Some(Role::Waiter), Some(error), &body).into_response()
}
