//! Status code of the JSON envelope for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::NotFound => StatusCode::NOT_FOUND,

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied => StatusCode::FORBIDDEN,

            Self::ValidationFailed
            | Self::RequiredField
            | Self::OrderEmpty
            | Self::MenuItemInvalidPrice => StatusCode::BAD_REQUEST,

            // the frontend is a gateway in front of the backend
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,
            Self::BackendError | Self::InvalidResponse => StatusCode::BAD_GATEWAY,
        }
    }
}
