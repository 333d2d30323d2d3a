use thiserror::Error;

/// Startup and serving failures of the frontend process
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build backend client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Server stopped: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
