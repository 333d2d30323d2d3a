use std::sync::Arc;

use koala_client::{HttpClient, SessionContext, TokenVerifier};
use shared::Session;

use crate::core::{Config, GuardMode, Result};

/// 服务器状态 - 请求间共享的只读数据
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | backend | reqwest::Client | 后端连接池 |
/// | verifier | Option<TokenVerifier> | token 模式下的令牌校验 |
///
/// Sessions are never stored here; each request carries its own in cookies.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    backend: reqwest::Client,
    verifier: Option<TokenVerifier>,
}

impl ServerState {
    pub fn initialize(config: &Config) -> Result<Self> {
        let backend = config.client_config().build_reqwest()?;

        let verifier = match config.guard_mode {
            GuardMode::Presence => None,
            GuardMode::Token => {
                let verifier = TokenVerifier::new(config.jwt_secret.as_deref());
                if !verifier.checks_signature() {
                    tracing::warn!("GUARD_MODE=token without JWT_SECRET: only expiry is checked");
                }
                Some(verifier)
            }
        };

        Ok(Self {
            config: Arc::new(config.clone()),
            backend,
            verifier,
        })
    }

    /// Backend client carrying this request's token
    pub fn client_for(&self, session: &Session) -> HttpClient {
        HttpClient::with_client(
            self.backend.clone(),
            &self.config.backend_url,
            SessionContext::from(session),
        )
    }

    /// Backend client without credentials (login)
    pub fn anonymous_client(&self) -> HttpClient {
        HttpClient::with_client(
            self.backend.clone(),
            &self.config.backend_url,
            SessionContext::anonymous(),
        )
    }

    /// Present only in token guard mode
    pub fn token_verifier(&self) -> Option<&TokenVerifier> {
        self.verifier.as_ref()
    }
}
