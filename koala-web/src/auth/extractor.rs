//! Session Extractor
//!
//! Reads the token and role code from cookies so handlers receive an
//! explicit [`Session`] instead of reaching into the request.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use shared::Session;
use shared::session::{ACCESS_TOKEN_KEY, ROLE_ID_KEY};

/// Session of the browser making the request (possibly anonymous)
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S: Send + Sync> FromRequestParts<S> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(ACCESS_TOKEN_KEY).map(|c| c.value().to_string());
        let role_code = jar.get(ROLE_ID_KEY).map(|c| c.value().to_string());
        Ok(Self(Session::new(token, role_code)))
    }
}

impl std::ops::Deref for CurrentSession {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.0
    }
}
