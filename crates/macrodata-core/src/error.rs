use thiserror::Error;

/// Core error types for indicator resolution
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),
}

impl CoreError {
    /// Create a new UnknownIndicator error
    pub fn unknown_indicator(name: impl Into<String>) -> Self {
        Self::UnknownIndicator(name.into())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
