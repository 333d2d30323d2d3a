//! Koala Client - HTTP client for the Relaxing Koala backend
//!
//! Every backend call goes through [`HttpClient`], which carries the base URL
//! and the caller's [`SessionContext`]. Endpoint groups hang off the client:
//!
//! ```ignore
//! let http = HttpClient::new(&ClientConfig::default(), SessionContext::with_token(token))?;
//! let tables = http.waiter().tables().await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod token;

pub use api::{AuthApi, ChefApi, ManagerApi, SignedIn, WaiterApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use http::HttpClient;
pub use session::SessionContext;
pub use token::{TokenClaims, TokenError, TokenVerifier, read_claims};
