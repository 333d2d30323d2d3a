//! 守卫中间件
//!
//! Runs before routing reaches a page. Requests under a protected prefix
//! without the session cookie are redirected to `/login` and the page
//! never renders.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use shared::routing::{GuardDecision, RouteTarget, guard, is_protected};

use crate::core::ServerState;
use crate::security_log;

/// 守卫中间件 - 受保护路径要求会话 cookie
///
/// | 模式 | 放行条件 |
/// |------|----------|
/// | presence (默认) | cookie 存在 |
/// | token | cookie 存在且是未过期的访问令牌 (配置 JWT_SECRET 时校验签名) |
///
/// Unprotected paths always pass.
pub async fn require_session(
    State(state): State<ServerState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    let prefixes = &state.config.guard_prefixes;
    let cookie = jar.get(&state.config.session_cookie);

    if guard(path, cookie.is_some(), prefixes) == GuardDecision::RedirectToLogin {
        security_log!("WARN", "session_missing", path = path.to_string());
        return Redirect::to(RouteTarget::Login.path()).into_response();
    }

    if let (Some(verifier), Some(cookie)) = (state.token_verifier(), cookie)
        && is_protected(path, prefixes)
        && let Err(e) = verifier.verify(cookie.value())
    {
        security_log!(
            "WARN",
            "session_rejected",
            path = path.to_string(),
            error = e.to_string()
        );
        return Redirect::to(RouteTarget::Login.path()).into_response();
    }

    next.run(req).await
}
