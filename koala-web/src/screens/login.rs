//! Login and logout
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /login | GET | 登录表单 |
//! | /login | POST | 登录, 写入 cookie 后跳转 /home |
//! | /logout | POST | 清除 cookie 后跳转 /login |

use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use shared::models::LoginForm;
use shared::routing::LOGOUT_PATH;
use shared::{AppError, ErrorCode, RouteTarget};

use crate::auth::cookies::{clear_session, store_session};
use crate::core::ServerState;
use crate::screens::layout::{escape, page};

pub const LOGIN_FAILED: &str = "Login failed. Please check your username and password.";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(RouteTarget::Login.path(), get(show).post(submit))
        .route(LOGOUT_PATH, post(logout))
}

fn render(username: &str, error: Option<&AppError>) -> Response {
    let body = format!(
        "<form method=\"post\" action=\"/login\">\
<p><label>Username <input name=\"username\" value=\"{}\" autocomplete=\"username\" required></label></p>\
<p><label>Password <input name=\"password\" type=\"password\" autocomplete=\"current-password\" required></label></p>\
<p><button type=\"submit\">Login</button></p>\
</form>",
        escape(username)
    );
    page("Login", None, error, &body).into_response()
}

/// GET /login
async fn show() -> Response {
    render("", None)
}

/// POST /login
async fn submit(
    State(state): State<ServerState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        let error = AppError::with_message(ErrorCode::RequiredField, LOGIN_FAILED);
        return render(username, Some(&error));
    }

    match state
        .anonymous_client()
        .auth()
        .sign_in(username, &form.password)
        .await
    {
        Ok(signed_in) => {
            let jar = store_session(
                jar,
                &state.config,
                &signed_in.token.access_token,
                signed_in.role_code.as_deref(),
            );
            (jar, Redirect::to(RouteTarget::Home.path())).into_response()
        }
        Err(e) => {
            tracing::warn!(username, error = %e, "Login failed");
            let code = e.code();
            render(username, Some(&AppError::with_message(code, LOGIN_FAILED)))
        }
    }
}

/// POST /logout
async fn logout(State(state): State<ServerState>, jar: CookieJar) -> Response {
    let jar = clear_session(jar, &state.config);
    (jar, Redirect::to(RouteTarget::Login.path())).into_response()
}
