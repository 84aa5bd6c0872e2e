//! Configuration error types

use aurora_rbac::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid permission override: {0}")]
    InvalidOverride(#[from] PolicyError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("XDG directory error: {0}")]
    XdgError(String),
}
