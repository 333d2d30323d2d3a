//! Shared page layout
//!
//! Pages are assembled with `format!`; every interpolated backend value
//! passes through [`escape`].

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use shared::routing::LOGOUT_PATH;
use shared::{AppError, Role};

pub const APP_TITLE: &str = "Relaxing Koala Restaurant";

const STYLE: &str = "body{font-family:sans-serif;margin:0;background:#f6f4ef}\
header{display:flex;justify-content:space-between;align-items:center;padding:12px 24px;background:#4b6043;color:#fff}\
main{padding:24px}\
.banner{background:#fbe3e1;border:1px solid #d9534f;color:#7a1f1c;padding:10px 14px;margin-bottom:16px}\
.grid{border-collapse:separate;border-spacing:12px}\
.grid td{width:150px;height:110px;vertical-align:top;background:#fff;border:1px solid #ccc;padding:8px}\
.grid td.empty{background:transparent;border:none}\
.vacant{color:#2e7d32}.reserved{color:#ef6c00}.eating{color:#c62828}\
table.list{border-collapse:collapse}table.list td,table.list th{border-bottom:1px solid #ddd;padding:6px 10px;text-align:left}\
form.inline{display:inline}";

/// Escape text for HTML element content and attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Error banner shown above a screen's content
pub fn banner(error: Option<&AppError>) -> String {
    match error {
        Some(e) => format!(
            "<div class=\"banner\" role=\"alert\"><strong>{}</strong> {}</div>",
            e.code,
            escape(&e.message)
        ),
        None => String::new(),
    }
}

/// Wrap a screen body in the application shell
///
/// The logout button is shown when `role` is known.
pub fn page(heading: &str, role: Option<Role>, error: Option<&AppError>, body: &str) -> Html<String> {
    let nav = match role {
        Some(role) => format!(
            "<span>Signed in as {}</span> \
<form class=\"inline\" method=\"post\" action=\"{LOGOUT_PATH}\"><button type=\"submit\">Logout</button></form>",
            role
        ),
        None => String::new(),
    };

    Html(format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title} - {heading}</title>\
<style>{STYLE}</style></head><body>\
<header><strong>{title}</strong><nav>{nav}</nav></header>\
<main><h1>{heading}</h1>{banner}{body}</main>\
</body></html>",
        title = APP_TITLE,
        heading = escape(heading),
        banner = banner(error),
    ))
}

/// Fallback for unknown paths
pub async fn not_found() -> Response {
    let body = "<p>This page does not exist.</p><p><a href=\"/\">Back to start</a></p>";
    (StatusCode::NOT_FOUND, page("Not found", None, None, body)).into_response()
}
