//! 核心模块 - 配置、状态和服务器
//!
//! - [`Config`] - 前端配置
//! - [`ServerState`] - 请求间共享的状态
//! - [`Server`] - HTTP 服务器
//! - [`ServerError`] - 启动错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, GuardMode};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
