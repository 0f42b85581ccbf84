//! Error types for the Tribune library.
//!
//! All errors are represented by the [`TribuneError`] enum. Structural
//! problems (a malformed input file, an out-of-domain configuration value,
//! degenerate training data) surface as errors; text content itself never
//! does, since normalization and feature transformation are total over
//! their input domain.
//!
//! # Examples
//!
//! ```
//! use tribune::error::{TribuneError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TribuneError::config("cv_folds must be at least 2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Tribune operations.
#[derive(Error, Debug)]
pub enum TribuneError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input dataset schema errors (missing column, wrong type)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Text analysis errors (pattern compilation, pipeline construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors (out-of-domain parameter values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Training errors (degenerate training data, unfitted model use)
    #[error("Training error: {0}")]
    Training(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TribuneError.
pub type Result<T> = std::result::Result<T, TribuneError>;

impl TribuneError {
    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        TribuneError::Schema(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TribuneError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TribuneError::Config(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        TribuneError::Training(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TribuneError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TribuneError::schema("missing column 'user_id'");
        assert_eq!(error.to_string(), "Schema error: missing column 'user_id'");

        let error = TribuneError::config("max_df must be in (0, 1]");
        assert_eq!(
            error.to_string(),
            "Configuration error: max_df must be in (0, 1]"
        );

        let error = TribuneError::training("fold contains a single class");
        assert_eq!(
            error.to_string(),
            "Training error: fold contains a single class"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let tribune_error = TribuneError::from(io_error);

        match tribune_error {
            TribuneError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
