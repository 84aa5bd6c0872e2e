//! Error types for the application context.

use aurora_board::BoardError;
use aurora_config::ConfigError;
use aurora_rbac::EnforcementError;
use thiserror::Error;

/// Result type for Aurora operations.
pub type Result<T> = std::result::Result<T, AuroraError>;

/// Errors that can occur in Aurora operations.
#[derive(Debug, Error)]
pub enum AuroraError {
    /// The current session may not perform the action.
    #[error(transparent)]
    Denied(#[from] EnforcementError),

    /// A Kanban move could not be applied.
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    /// The configuration could not be turned into a running context.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl AuroraError {
    /// Whether the error is a permission decision rather than a fault.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }
}
