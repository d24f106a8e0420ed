//! Error types for the Glossa text-analysis engine.
//!
//! The analysis functions themselves are total and never fail. Errors only
//! surface at the edges: loading configuration, reading input files, writing
//! results, and driving the chat loop.

use thiserror::Error;

/// The main error type for Glossa operations.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Empty input.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Input that cannot be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Glossa operations.
pub type Result<T> = std::result::Result<T, GlossaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GlossaError::Config("threshold out of range".to_string());
        assert_eq!(err.to_string(), "Configuration error: threshold out of range");

        let err = GlossaError::EmptyInput("message".to_string());
        assert_eq!(err.to_string(), "Empty input: message");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GlossaError = io.into();
        assert!(matches!(err, GlossaError::Io(_)));
    }
}
