//! Numeric error codes
//!
//! The thousands digit groups a code by concern (see [`super::ErrorCategory`]).
//! Codes travel as plain integers in JSON envelopes and render as `E0003`
//! in logs.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    Success = 0,
    /// Backend rejected the payload (400/409/422)
    ValidationFailed = 2,
    NotFound = 3,
    /// A form field was left empty
    RequiredField = 7,

    /// No session cookie or bearer token
    NotAuthenticated = 1001,
    /// Unknown user or wrong password at login
    InvalidCredentials = 1002,
    TokenExpired = 1003,
    /// Malformed token or bad signature
    TokenInvalid = 1004,

    /// Backend answered 403
    PermissionDenied = 2001,

    /// Waiter submitted an order with every quantity at zero
    OrderEmpty = 4001,

    /// Manager typed a price that is not a non-negative number
    MenuItemInvalidPrice = 6001,

    /// Backend unreachable
    NetworkError = 9003,
    /// Backend did not answer within the request timeout
    TimeoutError = 9004,
    /// Backend answered with a status the frontend has no mapping for
    BackendError = 9006,
    /// Backend body did not match the expected shape
    InvalidResponse = 9007,
}

impl ErrorCode {
    /// Every code, in numeric order
    pub const ALL: [ErrorCode; 15] = [
        Self::Success,
        Self::ValidationFailed,
        Self::NotFound,
        Self::RequiredField,
        Self::NotAuthenticated,
        Self::InvalidCredentials,
        Self::TokenExpired,
        Self::TokenInvalid,
        Self::PermissionDenied,
        Self::OrderEmpty,
        Self::MenuItemInvalidPrice,
        Self::NetworkError,
        Self::TimeoutError,
        Self::BackendError,
        Self::InvalidResponse,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default banner text
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::ValidationFailed => "The request was rejected by the restaurant server",
            Self::NotFound => "Not found",
            Self::RequiredField => "Please fill in every required field",
            Self::NotAuthenticated => "Please log in first",
            Self::InvalidCredentials => "Incorrect username or password",
            Self::TokenExpired => "Your session has expired, please log in again",
            Self::TokenInvalid => "Your session is invalid, please log in again",
            Self::PermissionDenied => "You are not allowed to do that",
            Self::OrderEmpty => "Please select at least one dish before submitting the order",
            Self::MenuItemInvalidPrice => "Menu item price must be a non-negative number",
            Self::NetworkError => "Cannot reach the restaurant server",
            Self::TimeoutError => "The restaurant server took too long to answer",
            Self::BackendError => "The restaurant server failed to handle the request",
            Self::InvalidResponse => "The restaurant server sent an unexpected answer",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number outside the code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_converts_back() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(InvalidErrorCode(4242).to_string(), "unknown error code 4242");
    }

    #[test]
    fn test_display_is_padded() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::NetworkError.to_string(), "E9003");
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::TokenExpired).unwrap();
        assert_eq!(json, "1003");
        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::OrderEmpty);
        assert!(serde_json::from_str::<ErrorCode>("8").is_err());
    }
}
