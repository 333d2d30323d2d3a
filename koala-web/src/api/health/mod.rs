//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 简单健康检查 | 无 |
//!
//! ```json
//! { "code": 0, "message": "OK", "data": { "status": "ok", "version": "0.1.0", "backend_url": "http://127.0.0.1:8000" } }
//! ```

use axum::{Router, extract::State, routing::get};
use serde::Serialize;
use shared::ApiResponse;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    backend_url: String,
}

async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend_url: state.config.backend_url.clone(),
    })
}
