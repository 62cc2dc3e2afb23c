//! Error types for the smish library.
//!
//! All failures are represented by the [`SmishError`] enum. Startup-time
//! artifact errors are fatal to the process; per-request errors are
//! isolated to the request that triggered them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for smish operations.
#[derive(Error, Debug)]
pub enum SmishError {
    /// No candidate model directory could be resolved, or a resolved
    /// directory is missing one of the required artifact files. Fatal at
    /// startup; the process must not serve traffic.
    #[error("model artifacts not found (tried: {})", format_tried(.tried))]
    ArtifactsNotFound {
        /// Every path that was tried, in resolution order.
        tried: Vec<PathBuf>,
    },

    /// An artifact file exists but could not be deserialized, or the
    /// vectorizer/classifier pair do not match. Fatal at startup.
    #[error("model artifact corrupt at {path}: {reason}")]
    ArtifactCorrupt { path: PathBuf, reason: String },

    /// `predict` was invoked before artifact loading completed.
    #[error("classifier not ready: model artifacts have not been loaded")]
    NotReady,

    /// Empty or absent input text. Raised by the calling layer before
    /// inference is attempted, never by the core pipeline.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected failure during normalization, vectorization, or
    /// prediction.
    #[error("inference failed: {0}")]
    Inference(String),

    /// Corpus parsing or model fitting failure.
    #[error("training failed: {0}")]
    Training(String),

    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

fn format_tried(tried: &[PathBuf]) -> String {
    tried
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for operations that may fail with SmishError.
pub type Result<T> = std::result::Result<T, SmishError>;

impl SmishError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SmishError::InvalidInput(msg.into())
    }

    /// Create a new inference error.
    pub fn inference<S: Into<String>>(msg: S) -> Self {
        SmishError::Inference(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        SmishError::Training(msg.into())
    }

    /// Create a new corrupt-artifact error.
    pub fn corrupt<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        SmishError::ArtifactCorrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is fatal at startup (the process must not begin
    /// serving requests).
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(
            self,
            SmishError::ArtifactsNotFound { .. } | SmishError::ArtifactCorrupt { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SmishError::invalid_input("no text provided");
        assert_eq!(error.to_string(), "invalid input: no text provided");

        let error = SmishError::inference("vector length mismatch");
        assert_eq!(
            error.to_string(),
            "inference failed: vector length mismatch"
        );
    }

    #[test]
    fn test_artifacts_not_found_lists_paths() {
        let error = SmishError::ArtifactsNotFound {
            tried: vec![PathBuf::from("/a/models"), PathBuf::from("/b/models")],
        };
        let message = error.to_string();
        assert!(message.contains("/a/models"));
        assert!(message.contains("/b/models"));
        assert!(error.is_fatal_at_startup());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = SmishError::from(io_error);

        match error {
            SmishError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
        assert!(!error.is_fatal_at_startup());
    }
}
