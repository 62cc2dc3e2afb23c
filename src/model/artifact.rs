//! Artifact resolution and loading.
//!
//! The trained vectorizer and classifier are stored as two bincode files
//! in a `models` directory. Deployments place that directory at more than
//! one conventional location, so [`ArtifactStore`] searches an ordered
//! candidate list and picks the first directory that exists:
//!
//! 1. an explicit directory (`--models-dir` / `SMISH_MODELS_DIR`), if any;
//! 2. `models` beside the executable;
//! 3. `models` one level above the executable;
//! 4. `models` under the current working directory.
//!
//! Loading happens exactly once at process startup. Any failure here is
//! fatal: the process must not begin serving requests with a missing or
//! corrupt model.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SmishError};
use crate::model::bayes::MultinomialNb;
use crate::model::metadata::ModelMetadata;
use crate::model::vectorizer::TfIdfVectorizer;

/// File name of the serialized vectorizer artifact.
pub const VECTORIZER_FILE: &str = "vectorizer.bin";
/// File name of the serialized classifier artifact.
pub const MODEL_FILE: &str = "model.bin";
/// File name of the optional training metadata.
pub const METADATA_FILE: &str = "metadata.json";

/// Resolver and loader for the trained model artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    candidates: Vec<PathBuf>,
}

impl ArtifactStore {
    /// Build a store with the canonical candidate list, optionally headed
    /// by an explicitly configured directory.
    pub fn new(explicit: Option<PathBuf>) -> Self {
        let mut candidates = Vec::new();

        if let Some(dir) = explicit {
            candidates.push(dir);
        }

        if let Ok(exe) = std::env::current_exe() {
            if let Some(exe_dir) = exe.parent() {
                candidates.push(exe_dir.join("models"));
                if let Some(parent) = exe_dir.parent() {
                    candidates.push(parent.join("models"));
                }
            }
        }

        candidates.push(PathBuf::from("models"));

        ArtifactStore { candidates }
    }

    /// Build a store that searches exactly the given directories.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        ArtifactStore { candidates }
    }

    /// The candidate directories, in resolution order.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Resolve the first candidate directory that exists.
    pub fn resolve(&self) -> Result<PathBuf> {
        self.candidates
            .iter()
            .find(|dir| dir.is_dir())
            .cloned()
            .ok_or_else(|| SmishError::ArtifactsNotFound {
                tried: self.candidates.clone(),
            })
    }

    /// Load both artifacts from the resolved directory.
    ///
    /// Both files must be present and must deserialize, and the pair must
    /// match (vocabulary size == classifier feature count); anything less
    /// leaves nothing half-initialized.
    pub fn load(&self) -> Result<(TfIdfVectorizer, MultinomialNb)> {
        let dir = self.resolve()?;

        let vectorizer_path = dir.join(VECTORIZER_FILE);
        let model_path = dir.join(MODEL_FILE);

        let missing: Vec<PathBuf> = [&vectorizer_path, &model_path]
            .into_iter()
            .filter(|path| !path.is_file())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(SmishError::ArtifactsNotFound { tried: missing });
        }

        let vectorizer: TfIdfVectorizer = read_artifact(&vectorizer_path)?;
        let model: MultinomialNb = read_artifact(&model_path)?;

        if model.n_features() != vectorizer.vocabulary_size() {
            return Err(SmishError::corrupt(
                dir,
                format!(
                    "artifact pair mismatch: vectorizer has {} terms, classifier expects {} features",
                    vectorizer.vocabulary_size(),
                    model.n_features()
                ),
            ));
        }

        log::info!(
            "loaded model artifacts from {} ({} features)",
            dir.display(),
            model.n_features()
        );

        Ok((vectorizer, model))
    }

    /// Load the optional training metadata from the resolved directory.
    pub fn load_metadata(&self) -> Option<ModelMetadata> {
        let path = self.resolve().ok()?.join(METADATA_FILE);
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

/// Write both artifacts (and metadata) into `dir`, creating it if needed.
pub fn save_artifacts(
    dir: &Path,
    vectorizer: &TfIdfVectorizer,
    model: &MultinomialNb,
    metadata: &ModelMetadata,
) -> Result<()> {
    fs::create_dir_all(dir)?;

    write_artifact(&dir.join(VECTORIZER_FILE), vectorizer)?;
    write_artifact(&dir.join(MODEL_FILE), model)?;

    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(dir.join(METADATA_FILE), json)?;

    Ok(())
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path)?;
    let (value, _) = bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
        .map_err(|e| SmishError::corrupt(path, e.to_string()))?;
    Ok(value)
}

fn write_artifact<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = bincode::serde::encode_to_vec(value, bincode::config::standard())
        .map_err(|e| SmishError::corrupt(path, e.to_string()))?;
    fs::write(path, bytes)?;
    Ok(())
}
