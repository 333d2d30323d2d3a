//! Session cookies
//!
//! | Cookie | 内容 |
//! |--------|------|
//! | `access_token` | bearer token issued by the backend |
//! | `role_id` | role code (`"1"` waiter, `"2"` chef, `"3"` manager) |
//! | session cookie (configurable) | same token; its presence admits the guard |

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::session::{ACCESS_TOKEN_KEY, ROLE_ID_KEY};

use crate::core::Config;

fn session_cookie(name: String, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Persist a fresh login
pub fn store_session(
    jar: CookieJar,
    config: &Config,
    token: &str,
    role_code: Option<&str>,
) -> CookieJar {
    let secure = config.is_production();
    let jar = jar
        .add(session_cookie(
            ACCESS_TOKEN_KEY.to_string(),
            token.to_string(),
            secure,
        ))
        .add(session_cookie(
            config.session_cookie.clone(),
            token.to_string(),
            secure,
        ));

    match role_code {
        Some(code) => jar.add(session_cookie(
            ROLE_ID_KEY.to_string(),
            code.to_string(),
            secure,
        )),
        None => jar.remove(Cookie::build(ROLE_ID_KEY).path("/")),
    }
}

/// Forget the session (logout)
pub fn clear_session(jar: CookieJar, config: &Config) -> CookieJar {
    jar.remove(Cookie::build(ACCESS_TOKEN_KEY).path("/"))
        .remove(Cookie::build(ROLE_ID_KEY).path("/"))
        .remove(Cookie::build(config.session_cookie.clone()).path("/"))
}
