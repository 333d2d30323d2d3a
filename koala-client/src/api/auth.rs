//! Login and profile

use crate::token::read_claims;
use crate::{ClientError, ClientResult, HttpClient, SessionContext};
use shared::models::{LoginForm, Token, User};

pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

/// Everything the frontend persists after a successful login
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub token: Token,
    /// Role code from the token claims, `None` if the claims lack it
    pub role_code: Option<String>,
    /// Profile from `/users/me/`, when the backend provides one
    pub user: Option<User>,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `POST /login` with form-encoded credentials
    ///
    /// The backend answers 404 for an unknown user and 400 for a wrong
    /// password; both become [`ClientError::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Token> {
        let form = LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.http
            .post_form("/login", &form)
            .await
            .map_err(|e| match e {
                ClientError::NotFound(msg)
                | ClientError::Validation(msg)
                | ClientError::Unauthorized(msg) => ClientError::InvalidCredentials(msg),
                other => other,
            })
    }

    /// `GET /users/me/`
    pub async fn current_user(&self) -> ClientResult<User> {
        self.http.get("/users/me/").await
    }

    /// Login, then learn the role from the token and fetch the profile
    ///
    /// The profile fetch is best-effort: a failure is logged and the sign-in
    /// still succeeds.
    pub async fn sign_in(&self, username: &str, password: &str) -> ClientResult<SignedIn> {
        let token = self.login(username, password).await?;

        let role_code = match read_claims(&token.access_token) {
            Ok(claims) => claims.role_code(),
            Err(e) => {
                tracing::warn!(username, error = %e, "Could not read role from access token");
                None
            }
        };

        let authed = self
            .http
            .with_session(SessionContext::with_token(token.access_token.clone()));
        let user = match authed.auth().current_user().await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!(username, error = %e, "Profile unavailable after login");
                None
            }
        };

        // A profile role wins over the claim when both exist.
        let role_code = user
            .as_ref()
            .map(|u| u.role_id.to_string())
            .or(role_code);

        tracing::info!(username, role_id = ?role_code, "Staff signed in");
        Ok(SignedIn {
            token,
            role_code,
            user,
        })
    }
}
