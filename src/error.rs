//! Custom error types for credline
//!
//! This module defines the error hierarchy for the wizard using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for credline operations
#[derive(Error, Debug, Clone)]
pub enum CredlineError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The items provider could not be reached or answered badly
    #[error("Network error: {0}")]
    Network(String),

    /// The provider returned fewer step contents than the wizard needs
    #[error("Not enough data: received {received} step(s), need {required}")]
    InsufficientData { received: usize, required: usize },

    /// A sequencer transition that the current state does not allow
    #[error("Invalid transition: {action} with {committed} committed step(s)")]
    InvalidTransition { action: String, committed: usize },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CredlineError {
    /// Create an invalid-transition fault
    pub fn invalid_transition(action: impl Into<String>, committed: usize) -> Self {
        Self::InvalidTransition {
            action: action.into(),
            committed,
        }
    }

    /// Whether this error ends the wizard's loading phase for good
    pub fn is_terminal_load_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Json(_) | Self::InsufficientData { .. }
        )
    }

    /// Check if this is a sequencer contract violation
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

impl From<std::io::Error> for CredlineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CredlineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for CredlineError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for credline operations
pub type CredlineResult<T> = Result<T, CredlineError>;
