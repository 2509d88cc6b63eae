use thiserror::Error;

/// Server startup / runtime errors
///
/// Request-level failures use [`shared::AppError`]; these only surface from
/// [`crate::core::Server::run`].
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type for server operations
pub type Result<T> = std::result::Result<T, ServerError>;
