//! Training metadata written alongside the model artifacts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata describing a training run. Stored as `metadata.json` next to
/// the binary artifacts; informational only, its absence is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier.
    pub name: String,
    /// Crate version that produced the artifacts.
    pub version: String,
    /// Training timestamp.
    pub trained_at: chrono::DateTime<chrono::Utc>,
    /// Number of training examples used.
    pub training_examples: usize,
    /// Number of features in the fitted vocabulary.
    pub features: usize,
    /// Performance metrics on the hold-out set.
    pub validation_metrics: HashMap<String, f64>,
}
