//! Waiter screen
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /home/waiter | GET | 桌台网格 |
//! | /home/waiter/tables/{id}/check-in | POST | 入座 (vacant → reserved) |
//! | /home/waiter/tables/{id}/order/new | GET, POST | 点单表单 / 调整数量 |
//! | /home/waiter/tables/{id}/order | GET | 查看订单 |
//! | /home/waiter/tables/{id}/order | POST | 提交订单 (→ eating) |
//! | /home/waiter/tables/{id}/payment | POST | 结账 (→ vacant) |

mod handler;
pub mod state;
mod view;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/home/waiter", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/tables/{id}/check-in", post(handler::check_in))
        .route(
            "/tables/{id}/order/new",
            get(handler::new_order).post(handler::adjust_order),
        )
        .route(
            "/tables/{id}/order",
            get(handler::view_order).post(handler::submit_order),
        )
        .route("/tables/{id}/payment", post(handler::payment))
}
