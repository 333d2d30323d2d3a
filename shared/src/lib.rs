//! Shared types for the Koala frontend
//!
//! Types used by both the backend client and the web frontend: backend DTOs,
//! session keys, role codes, route decisions and the unified error system.

pub mod error;
pub mod models;
pub mod routing;
pub mod session;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use routing::{GuardDecision, Role, RouteTarget, decide_route, guard};
pub use session::Session;
