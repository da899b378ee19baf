//! Error types for the spamscore library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpamScoreError`] enum. Scoring never fails; errors come from loading
//! training data, reading configuration and running the web server.
//!
//! # Examples
//!
//! ```
//! use spamscore::error::{Result, SpamScoreError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpamScoreError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spamscore operations.
#[derive(Error, Debug)]
pub enum SpamScoreError {
    /// I/O errors (file operations, sockets, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Training data could not be loaded
    #[error("Load error: {0}")]
    Load(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Web server errors
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpamScoreError.
pub type Result<T> = std::result::Result<T, SpamScoreError>;

impl SpamScoreError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        SpamScoreError::Load(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpamScoreError::Config(msg.into())
    }

    /// Create a new server error.
    pub fn server<S: Into<String>>(msg: S) -> Self {
        SpamScoreError::Server(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpamScoreError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Whether this error happened while reading training data.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            SpamScoreError::Io(_) | SpamScoreError::Csv(_) | SpamScoreError::Load(_)
        )
    }
}
