//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Failure category of a backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection refused, DNS, TLS, timeout
    Network,
    /// 401, missing token, rejected credentials
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 400, 409 and 422
    Validation,
    /// Any other non-2xx status
    Server,
    /// 2xx with a body that does not match the expected shape
    Decode,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No token in the session context
    #[error("Not logged in")]
    MissingToken,

    /// Login rejected
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Authentication required
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unexpected status from the backend
    #[error("Backend error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(e) if e.is_decode() => ErrorKind::Decode,
            Self::Http(_) => ErrorKind::Network,
            Self::MissingToken | Self::InvalidCredentials(_) | Self::Unauthorized(_) => {
                ErrorKind::Unauthorized
            }
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Server { .. } => ErrorKind::Server,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorKind::Decode,
        }
    }

    /// Application error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            _ => match self.kind() {
                ErrorKind::Network => ErrorCode::NetworkError,
                ErrorKind::Unauthorized => ErrorCode::NotAuthenticated,
                ErrorKind::Forbidden => ErrorCode::PermissionDenied,
                ErrorKind::NotFound => ErrorCode::NotFound,
                ErrorKind::Validation => ErrorCode::ValidationFailed,
                ErrorKind::Server => ErrorCode::BackendError,
                ErrorKind::Decode => ErrorCode::InvalidResponse,
            },
        }
    }

    /// Text suitable for the user-facing banner
    ///
    /// Backend `detail` text is passed through; transport failures get the
    /// generic message of their code.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Server { message: msg, .. } => msg.clone(),
            _ => self.code().message().to_string(),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let code = err.code();
        let app = AppError::with_message(code, err.user_message());
        match err {
            ClientError::Server { status, .. } => app.with_detail("status", status),
            _ => app,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
