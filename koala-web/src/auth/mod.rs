//! 认证模块 - 会话 cookie、守卫中间件、会话提取
//!
//! The frontend never validates credentials itself. Login stores what the
//! backend issued in cookies; the guard checks the session cookie before a
//! protected page renders.

pub mod cookies;
mod extractor;
mod guard;

pub use extractor::CurrentSession;
pub use guard::require_session;
