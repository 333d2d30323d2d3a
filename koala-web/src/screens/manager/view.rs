//! Menu administration rendering

use axum::response::{IntoResponse, Response};
use shared::models::{MenuSectionWithItems, SectionItem};
use shared::{AppError, Role};

use super::state::ManagerScreen;
use crate::screens::layout::{escape, page};

const BASE: &str = "/home/manager";

fn item_row(section_id: u32, item: &SectionItem) -> String {
    let id = item.menu_item_id;
    let note = item.note.as_deref().map(escape).unwrap_or_default();
    format!(
        "<tr><td colspan=\"4\">\
<form class=\"inline\" method=\"post\" action=\"{BASE}/items/{id}\">\
<input type=\"hidden\" name=\"menu_section_id\" value=\"{section_id}\">\
<input name=\"item_name\" value=\"{}\" required> \
<input name=\"note\" value=\"{note}\" placeholder=\"Note\"> \
<input name=\"price\" value=\"{}\" size=\"6\" required> \
<button type=\"submit\">Save</button></form> \
<form class=\"inline\" method=\"post\" action=\"{BASE}/items/{id}/delete\"><button type=\"submit\">Delete</button></form>\
</td></tr>",
        escape(&item.item_name),
        item.price,
    )
}

fn section_block(section: &MenuSectionWithItems) -> String {
    let id = section.menu_section_id;
    let mut rows = String::new();
    for item in &section.menu_items {
        rows.push_str(&item_row(id, item));
    }
    if rows.is_empty() {
        rows.push_str("<tr><td>No items yet.</td></tr>");
    }
    format!(
        "<section><h2>{} \
<form class=\"inline\" method=\"post\" action=\"{BASE}/sections/{id}/delete\"><button type=\"submit\">Delete section</button></form></h2>\
<table class=\"list\">{rows}</table>\
<form method=\"post\" action=\"{BASE}/sections/{id}/items\">\
<input name=\"item_name\" placeholder=\"Item name\" required> \
<input name=\"note\" placeholder=\"Note\"> \
<input name=\"price\" placeholder=\"Price\" size=\"6\" required> \
<button type=\"submit\">Add item</button></form></section>",
        escape(&section.section_name)
    )
}

pub fn menu(screen: &ManagerScreen, error: Option<&AppError>) -> Response {
    let mut body = format!(
        "<form method=\"post\" action=\"{BASE}/sections\">\
<input name=\"section_name\" placeholder=\"Section name\" required> \
<button type=\"submit\">Add section</button></form>"
    );
    if screen.sections.is_empty() {
        body.push_str("<p>The menu has no sections yet.</p>");
    }
    for section in &screen.sections {
        body.push_str(&section_block(section));
    }
    page("Menu", Some(Role::Manager), error, &body).into_response()
}
