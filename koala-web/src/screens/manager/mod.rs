//! Manager screen
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /home/manager | GET | 菜单分区与菜品 |
//! | /home/manager/sections | POST | 新增分区 |
//! | /home/manager/sections/{id}/delete | POST | 删除分区 |
//! | /home/manager/sections/{id}/items | POST | 新增菜品 |
//! | /home/manager/items/{id} | POST | 修改菜品 |
//! | /home/manager/items/{id}/delete | POST | 删除菜品 |
//!
//! Every successful change re-fetches the whole menu.

mod handler;
pub mod state;
mod view;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/home/manager", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/sections", post(handler::add_section))
        .route("/sections/{id}/delete", post(handler::delete_section))
        .route("/sections/{id}/items", post(handler::add_item))
        .route("/items/{id}", post(handler::update_item))
        .route("/items/{id}/delete", post(handler::delete_item))
}
