//! Per-request session context handed to the client

use shared::Session;

/// Credentials attached to outgoing requests
///
/// Built from whatever the caller holds (a cookie, a login response); the
/// client never reads ambient storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    token: Option<String>,
}

impl SessionContext {
    /// No credentials; only public endpoints succeed
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.is_empty()).then_some(token),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `Authorization` header value, if a token is held
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

impl From<&Session> for SessionContext {
    fn from(session: &Session) -> Self {
        match session.token() {
            Some(token) => Self::with_token(token),
            None => Self::anonymous(),
        }
    }
}
