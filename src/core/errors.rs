//! Shared error types for the quiz engine

use thiserror::Error;

use super::types::QuestionId;

/// Main error type for typequiz operations
#[derive(Debug, Error)]
pub enum Error {
    /// A Likert response outside 1..=5 or not an integer
    #[error("Invalid Likert value {value}: expected an integer from 1 to 5")]
    InvalidLikert { value: String },

    /// An answer referenced a question the session does not contain
    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    /// A question bank defined the same id twice
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    /// A session operation was called outside the states that allow it
    #[error("Cannot {operation} while session is {state}")]
    InvalidState {
        operation: &'static str,
        state: String,
    },

    /// Malformed category/stack table
    #[error("Stack table error: {0}")]
    StackTable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors (may list several problems)
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Create an invalid Likert error from anything displayable
    pub fn invalid_likert(value: impl ToString) -> Self {
        Self::InvalidLikert {
            value: value.to_string(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state(operation: &'static str, state: impl ToString) -> Self {
        Self::InvalidState {
            operation,
            state: state.to_string(),
        }
    }

    /// Whether the caller can recover by supplying different input.
    ///
    /// Invalid answers and state violations are recoverable; table and
    /// configuration errors are programmer errors surfaced at startup.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidLikert { .. } | Self::UnknownQuestion(_) | Self::InvalidState { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
