//! 路由组装

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// 访问日志: method, path, status, 耗时
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        target: "http_access",
        elapsed_ms = started.elapsed().as_millis() as u64,
        "{} {} {}",
        method,
        path,
        response.status()
    );

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API - public route
        .merge(crate::api::health::router())
        .merge(crate::api::session::router())
        // Redirector, login and logout
        .merge(crate::screens::home::router())
        .merge(crate::screens::login::router())
        // Role screens - behind the guard
        .merge(crate::screens::waiter::router())
        .merge(crate::screens::chef::router())
        .merge(crate::screens::manager::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and oneshot tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // Guard - runs before any page renders
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_session,
        ))
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(middleware::from_fn(log_request))
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
}
