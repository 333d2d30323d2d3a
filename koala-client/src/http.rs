//! HTTP client - backend communication

use crate::api::{AuthApi, ChefApi, ManagerApi, WaiterApi};
use crate::{ClientConfig, ClientError, ClientResult, SessionContext};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error body the backend returns on failure: `{"detail": ...}`
///
/// `detail` is a string for application errors and a list of field
/// errors for request validation failures.
#[derive(serde::Deserialize)]
struct DetailResponse {
    detail: serde_json::Value,
}

/// HTTP client bound to one session
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: SessionContext,
}

impl HttpClient {
    pub fn new(config: &ClientConfig, session: SessionContext) -> ClientResult<Self> {
        let client = config.build_reqwest()?;
        Ok(Self::with_client(client, config.normalized_base_url(), session))
    }

    /// Reuse an existing connection pool
    pub fn with_client(client: Client, base_url: &str, session: SessionContext) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Same pool and backend, different credentials
    pub fn with_session(&self, session: SessionContext) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            session,
        }
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn waiter(&self) -> WaiterApi<'_> {
        WaiterApi::new(self)
    }

    pub fn chef(&self) -> ChefApi<'_> {
        ChefApi::new(self)
    }

    pub fn manager(&self) -> ManagerApi<'_> {
        ManagerApi::new(self)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request carrying the bearer token; fails before sending without one
    fn authed(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let Some(auth) = self.session.bearer() else {
            tracing::warn!(%method, path, "Backend call attempted without a token");
            return Err(ClientError::MissingToken);
        };
        Ok(self
            .client
            .request(method, self.url(path))
            .header(reqwest::header::AUTHORIZATION, auth))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authed(Method::GET, path)?;
        let response = self.send(Method::GET, path, req).await?;
        self.decode(path, response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.authed(Method::POST, path)?.json(body);
        let response = self.send(Method::POST, path, req).await?;
        self.decode(path, response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.authed(Method::PUT, path)?.json(body);
        let response = self.send(Method::PUT, path, req).await?;
        self.decode(path, response).await
    }

    /// DELETE; the response body is ignored
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let req = self.authed(Method::DELETE, path)?;
        self.send(Method::DELETE, path, req).await?;
        Ok(())
    }

    /// Unauthenticated form-encoded POST (login)
    pub async fn post_form<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &B,
    ) -> ClientResult<T> {
        let req = self.client.post(self.url(path)).form(form);
        let response = self.send(Method::POST, path, req).await?;
        self.decode(path, response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> ClientResult<reqwest::Response> {
        let result = match req.send().await {
            Ok(response) => handle_status(response).await,
            Err(e) => Err(ClientError::Http(e)),
        };
        if let Err(e) = &result {
            tracing::warn!(%method, path, kind = ?e.kind(), error = %e, "Backend request failed");
        }
        result
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(path, error = %e, "Unexpected backend response shape");
            ClientError::Serialization(e)
        })
    }
}

/// Map a non-success status to its error, passing backend `detail` text through
async fn handle_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await?;
    let message = detail_message(&text).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    });

    Err(match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            ClientError::Validation(message)
        }
        _ => ClientError::Server {
            status: status.as_u16(),
            message,
        },
    })
}

/// Human-readable text of a `{"detail": ...}` body
fn detail_message(body: &str) -> Option<String> {
    let parsed: DetailResponse = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(errors) => {
            let msgs: Vec<String> = errors
                .iter()
                .filter_map(|e| e.get("msg").and_then(|m| m.as_str()).map(str::to_string))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        assert_eq!(
            detail_message(r#"{"detail":"Table not found"}"#).as_deref(),
            Some("Table not found")
        );
    }

    #[test]
    fn test_detail_validation_list() {
        let body = r#"{"detail":[{"loc":["body","price"],"msg":"value is not a valid decimal","type":"type_error"},{"loc":["body"],"msg":"field required"}]}"#;
        assert_eq!(
            detail_message(body).as_deref(),
            Some("value is not a valid decimal; field required")
        );
    }

    #[test]
    fn test_detail_absent() {
        assert_eq!(detail_message("Internal Server Error"), None);
        assert_eq!(detail_message(r#"{"detail":null}"#), None);
    }

    #[test]
    fn test_url_join() {
        let http = HttpClient::with_client(
            Client::new(),
            "http://backend:8000/",
            SessionContext::anonymous(),
        );
        assert_eq!(http.url("/users/me/"), "http://backend:8000/users/me/");
    }

    #[test]
    fn test_missing_token_fails_before_sending() {
        let http = HttpClient::with_client(
            Client::new(),
            "http://backend:8000",
            SessionContext::anonymous(),
        );
        assert!(matches!(
            http.authed(Method::GET, "/users/waiter/tables"),
            Err(ClientError::MissingToken)
        ));
    }
}
