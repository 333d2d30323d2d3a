//! Session redirector
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 按会话跳转 |
//! | /home | GET | 按角色跳转; 角色未知时显示通用首页 |

use axum::{
    Router,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use shared::RouteTarget;

use crate::auth::CurrentSession;
use crate::core::ServerState;
use crate::screens::layout::{not_found, page};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/home", get(home))
        .fallback(not_found)
}

/// GET / - 跳转到会话对应的页面
async fn root(session: CurrentSession) -> Redirect {
    Redirect::to(session.destination().path())
}

/// GET /home - 角色首页
///
/// Redirecting `/home` to itself would loop, so the generic home renders here.
async fn home(session: CurrentSession) -> Response {
    match session.destination() {
        RouteTarget::Home => {
            let body = "<p>Your account has no screen assigned yet. \
Ask a manager to set your role, then sign in again.</p>";
            page("Welcome", None, None, body).into_response()
        }
        target => Redirect::to(target.path()).into_response(),
    }
}
