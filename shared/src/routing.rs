//! Role-based redirection and route gating
//!
//! Two pure decisions drive navigation:
//!
//! - [`decide_route`]: given the stored token and role code, which top-level
//!   screen the user lands on.
//! - [`guard`]: whether a request for a path may proceed, based only on the
//!   presence of the session cookie.
//!
//! Neither performs I/O; the web layer turns the results into redirects.

use std::fmt;

/// Staff function, identified on the wire by a small integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Waiter,
    Chef,
    Manager,
}

impl Role {
    /// Parse the role code as stored client-side (`"1"`, `"2"`, `"3"`)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Waiter),
            "2" => Some(Self::Chef),
            "3" => Some(Self::Manager),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Waiter => "waiter",
            Self::Chef => "chef",
            Self::Manager => "manager",
        }
    }

    /// Home screen of this role
    pub fn home(&self) -> RouteTarget {
        match self {
            Self::Waiter => RouteTarget::WaiterHome,
            Self::Chef => RouteTarget::ChefHome,
            Self::Manager => RouteTarget::ManagerHome,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-level destination of a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteTarget {
    Login,
    Home,
    WaiterHome,
    ChefHome,
    ManagerHome,
}

impl RouteTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/home",
            Self::WaiterHome => "/home/waiter",
            Self::ChefHome => "/home/chef",
            Self::ManagerHome => "/home/manager",
        }
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Decide where a user lands from the stored token and role code
///
/// | token   | role code          | destination     |
/// |---------|--------------------|-----------------|
/// | absent  | any                | `/login`        |
/// | present | `"1"`              | `/home/waiter`  |
/// | present | `"2"`              | `/home/chef`    |
/// | present | `"3"`              | `/home/manager` |
/// | present | other or absent    | `/home` + warn  |
///
/// An empty token counts as absent.
pub fn decide_route(token: Option<&str>, role_code: Option<&str>) -> RouteTarget {
    if token.is_none_or(str::is_empty) {
        return RouteTarget::Login;
    }

    match role_code.and_then(Role::from_code) {
        Some(role) => role.home(),
        None => {
            tracing::warn!(role_id = ?role_code, "Unknown role_id, using generic home");
            RouteTarget::Home
        }
    }
}

/// Outcome of the route guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page
    Allow,
    /// Send the browser to `/login` before anything renders
    RedirectToLogin,
}

/// Sign-out endpoint, reachable whatever the guard prefixes say
pub const LOGOUT_PATH: &str = "/logout";

/// Paths the guard never gates, or signing in would loop back to itself
pub fn is_always_open(path: &str) -> bool {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    path == RouteTarget::Login.path() || path == LOGOUT_PATH
}

/// True if `path` is `prefix` itself or lies below it
///
/// `/home` protects `/home` and `/home/chef`, never `/homepage`.
/// `/login` and `/logout` are never protected, even under a `/` prefix.
pub fn is_protected<S: AsRef<str>>(path: &str, prefixes: &[S]) -> bool {
    if is_always_open(path) {
        return false;
    }
    prefixes.iter().any(|prefix| {
        let prefix = prefix.as_ref().trim_end_matches('/');
        if prefix.is_empty() {
            return true;
        }
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    })
}

/// Gate a path behind the presence of the session cookie
///
/// Only presence is checked; the cookie's value is never inspected.
pub fn guard<S: AsRef<str>>(path: &str, cookie_present: bool, prefixes: &[S]) -> GuardDecision {
    if !is_protected(path, prefixes) || cookie_present {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}
