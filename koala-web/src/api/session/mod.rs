//! 当前会话
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/session | GET | 当前角色与落地页 | cookie |
//!
//! ```json
//! { "code": 0, "message": "OK", "data": { "role": "chef", "role_id": "2", "destination": "/home/chef" } }
//! ```

use axum::{Router, routing::get};
use serde::Serialize;
use shared::{ApiResponse, AppError, AppResult};

use crate::auth::CurrentSession;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/session", get(current))
}

#[derive(Debug, Serialize)]
pub struct SessionInfo {
    /// `None` when the stored role code is not recognized
    role: Option<&'static str>,
    role_id: Option<String>,
    destination: &'static str,
}

/// GET /api/session
async fn current(session: CurrentSession) -> AppResult<ApiResponse<SessionInfo>> {
    if !session.is_authenticated() {
        return Err(AppError::unauthorized());
    }
    Ok(ApiResponse::success(SessionInfo {
        role: session.role().map(|r| r.name()),
        role_id: session.role_code().map(str::to_string),
        destination: session.destination().path(),
    }))
}
