//! Chef screen
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /home/chef | GET | 厨房菜品列表 |
//! | /home/chef/dishes/{id}/advance | POST | 推进菜品状态 |

mod handler;
pub mod state;
mod view;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/home/chef", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/dishes/{id}/advance", post(handler::advance))
}
