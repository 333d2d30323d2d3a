//! Client-side session
//!
//! The session is what the browser persists between requests: the bearer
//! token issued at login and the staff role code. Both are stored under
//! fixed key names so every screen reads them the same way.

use crate::routing::{Role, RouteTarget, decide_route};

/// Storage key of the bearer token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key of the role code
pub const ROLE_ID_KEY: &str = "role_id";

/// Default name of the cookie checked by the route guard
pub const DEFAULT_SESSION_COOKIE: &str = "session";

/// Token and role code read from client storage
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role_code: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>, role_code: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            role_code: role_code.filter(|r| !r.is_empty()),
        }
    }

    /// Session with nothing stored (logged out)
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role_code(&self) -> Option<&str> {
        self.role_code.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Recognized role, `None` for an absent or unknown code
    pub fn role(&self) -> Option<Role> {
        self.role_code().and_then(Role::from_code)
    }

    /// Where this session should land
    pub fn destination(&self) -> RouteTarget {
        decide_route(self.token(), self.role_code())
    }
}
