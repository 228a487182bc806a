//! Error types for sql2gorm.

use thiserror::Error;

/// The main error type for sql2gorm operations.
#[derive(Debug, Error)]
pub enum GormError {
    /// Failed to parse the SQL source.
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// The tree walk produced an impossible event sequence.
    #[error("Protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Event orderings the model builder refuses to accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    #[error("table '{open}' is still open when table '{next}' starts")]
    TableAlreadyOpen { open: String, next: String },

    #[error("{0} without an open table")]
    NoOpenTable(&'static str),

    #[error("column '{open}' is still open when column '{next}' starts")]
    ColumnAlreadyOpen { open: String, next: String },

    #[error("{0} without an open column")]
    NoOpenColumn(&'static str),

    #[error("walk finished with '{0}' still open")]
    Unfinished(String),
}

impl GormError {
    /// Create a parse error at the given position.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Whether this error came from the builder's ordering checks.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }
}

/// Result type alias for sql2gorm operations.
pub type GormResult<T> = Result<T, GormError>;
