//! Error codes and the error type shared by the client and the frontend
//!
//! | range | category | examples |
//! |-------|----------|----------|
//! | 0xxx  | general  | `NotFound`, `RequiredField` |
//! | 1xxx  | auth     | `InvalidCredentials`, `TokenExpired` |
//! | 2xxx  | permission | `PermissionDenied` |
//! | 4xxx  | order    | `OrderEmpty` |
//! | 6xxx  | menu     | `MenuItemInvalidPrice` |
//! | 9xxx  | system   | `NetworkError`, `BackendError` |
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderEmpty).with_detail("table_id", 4);
//! let body = ApiResponse::<()>::error(&err);
//! assert_eq!(body.code, Some(4001));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
