//! Top-level error for the binary: everything that can stop the server.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store task failed: {0}")]
    Shutdown(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, AppError>;
