//! Error types for the harness
//!
//! Only test-definition mistakes surface here. A model that reports the wrong
//! errors is an assertion failure and goes to the `TestRecorder`, never to
//! `HarnessError`.

use thiserror::Error;

/// Result type alias for harness operations
pub type HarnessResult<T> = std::result::Result<T, HarnessError>;

/// Errors raised by the harness itself
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The check was set up with parameters the catalog cannot work with
    ///
    /// Raised before any input reaches the model.
    #[error("Precondition violated for \"{rule}\" check: {reason}")]
    Precondition {
        /// Rule name of the rejected check
        rule: String,
        /// What was wrong with the setup
        reason: String,
    },

    /// Core type error
    #[error(transparent)]
    Core(#[from] fieldcheck_core::Error),

    /// Configuration could not be read, parsed or written
    #[error("Config error: {0}")]
    Config(String),
}

impl HarnessError {
    /// Build a precondition violation
    pub fn precondition(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        HarnessError::Precondition {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is a precondition violation
    pub fn is_precondition(&self) -> bool {
        matches!(self, HarnessError::Precondition { .. })
    }
}
