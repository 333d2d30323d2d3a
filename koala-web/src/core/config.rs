use koala_client::ClientConfig;
use shared::session::DEFAULT_SESSION_COOKIE;
use std::collections::HashMap;
use std::str::FromStr;

/// How the route guard judges the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardMode {
    /// Cookie present means signed in
    #[default]
    Presence,
    /// Cookie must hold an unexpired access token
    Token,
}

impl FromStr for GuardMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presence" => Ok(Self::Presence),
            "token" => Ok(Self::Token),
            other => Err(format!("unknown guard mode: {}", other)),
        }
    }
}

/// 前端配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | BACKEND_URL | http://127.0.0.1:8000 | 后端地址 |
/// | REQUEST_TIMEOUT_MS | 30000 | 后端请求超时(毫秒) |
/// | SESSION_COOKIE | session | 守卫检查的 cookie 名 |
/// | GUARD_PREFIXES | /home | 受保护路径前缀, 逗号分隔 |
/// | GUARD_MODE | presence | presence 或 token |
/// | JWT_SECRET | (无) | token 模式下校验签名 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// BACKEND_URL=http://10.0.0.5:8000 GUARD_MODE=token cargo run -p koala-web
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// 后端 API 地址
    pub backend_url: String,
    /// 后端请求超时 (毫秒)
    pub request_timeout_ms: u64,
    /// Cookie whose presence admits a request past the guard
    pub session_cookie: String,
    /// Path prefixes behind the guard
    pub guard_prefixes: Vec<String>,
    pub guard_mode: GuardMode,
    /// HS256 secret shared with the backend, for token mode
    pub jwt_secret: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an explicit key/value map
    ///
    /// 常用于测试场景
    pub fn from_map(vars: &HashMap<&str, &str>) -> Self {
        Self::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let guard_mode = match non_empty("GUARD_MODE").map(|m| m.parse::<GuardMode>()) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Falling back to presence guard");
                GuardMode::Presence
            }
            None => GuardMode::Presence,
        };

        let guard_prefixes = non_empty("GUARD_PREFIXES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|prefixes| !prefixes.is_empty())
            .unwrap_or_else(|| vec!["/home".to_string()]);

        Self {
            http_port: non_empty("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            backend_url: non_empty("BACKEND_URL")
                .unwrap_or_else(|| koala_client::config::DEFAULT_BASE_URL.into()),
            request_timeout_ms: non_empty("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            session_cookie: non_empty("SESSION_COOKIE")
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.into()),
            guard_prefixes,
            guard_mode,
            jwt_secret: non_empty("JWT_SECRET"),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Backend client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.backend_url.clone()).with_timeout_ms(self.request_timeout_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
