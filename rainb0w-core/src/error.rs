//! Unified error type definition

use thiserror::Error;

use crate::types::ScriptStatus;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Appliance configuration could not be read or is malformed
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// An external script exited unsuccessfully
    #[error("Action failed: {action} ({status})")]
    ActionFailed { action: String, status: ScriptStatus },

    /// The interactive surface could not be used (no terminal, broken pipe)
    #[error("Console unavailable: {0}")]
    ConsoleUnavailable(String),

    /// The operator aborted the session (Ctrl+C)
    #[error("Interrupted by operator")]
    Interrupted,
}

impl CoreError {
    /// Whether it is expected behavior (operator input, missing user), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) | Self::UserNotFound(_) | Self::Interrupted => true,
            Self::ConfigError(_)
            | Self::StorageError(_)
            | Self::SerializationError(_)
            | Self::ActionFailed { .. }
            | Self::ConsoleUnavailable(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
