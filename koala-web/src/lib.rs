//! Relaxing Koala frontend - 餐厅 POS 前端
//!
//! # 架构概述
//!
//! Server-rendered screens for waiters, chefs and managers, talking to the
//! restaurant backend through `koala-client`:
//!
//! - **路由守卫** (`auth`): session cookie gate in front of `/home`
//! - **重定向** (`screens::home`): role-based landing page
//! - **屏幕** (`screens`): login, waiter, chef and manager pages
//!
//! # 模块结构
//!
//! ```text
//! koala-web/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 守卫中间件、会话提取、cookie
//! ├── api/           # 健康检查
//! ├── routes/        # 路由组装、访问日志
//! ├── screens/       # HTML 页面
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod routes;
pub mod screens;
pub mod utils;

pub use auth::CurrentSession;
pub use core::{Config, GuardMode, Server, ServerState};
pub use routes::build_app;
pub use shared::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    __ __            __
   / //_/___  ____ _/ /___ _
  / ,< / __ \/ __ `/ / __ `/
 / /| / /_/ / /_/ / / /_/ /
/_/ |_\____/\__,_/_/\__,_/
   Relaxing Koala Restaurant
    "#
    );
}
