//! Error types for the Veracity library.
//!
//! All errors are represented by the [`VeracityError`] enum. Contract
//! violations (training on an empty corpus, predicting before training)
//! get their own variants so callers can match on them instead of parsing
//! messages.
//!
//! # Examples
//!
//! ```
//! use veracity::error::{Result, VeracityError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VeracityError::corpus("corpus contains no documents"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Veracity operations.
#[derive(Error, Debug)]
pub enum VeracityError {
    /// I/O errors (corpus file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Corpus-related errors (shape, contents)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Training was invoked with an empty example sequence
    #[error("Training corpus is empty: {message}")]
    EmptyCorpus {
        /// Description of the violated contract.
        message: String,
    },

    /// Prediction was requested before the model was trained
    #[error("Model not trained: {message}")]
    UntrainedModel {
        /// Description of the violated contract.
        message: String,
    },

    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VeracityError.
pub type Result<T> = std::result::Result<T, VeracityError>;

impl VeracityError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        VeracityError::Corpus(msg.into())
    }

    /// Create a new empty-corpus error.
    pub fn empty_corpus<S: Into<String>>(msg: S) -> Self {
        VeracityError::EmptyCorpus {
            message: msg.into(),
        }
    }

    /// Create a new untrained-model error.
    pub fn untrained_model<S: Into<String>>(msg: S) -> Self {
        VeracityError::UntrainedModel {
            message: msg.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VeracityError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VeracityError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VeracityError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
