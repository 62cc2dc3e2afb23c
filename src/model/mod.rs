//! Model artifacts, loading, and inference.

pub mod artifact;
pub mod bayes;
pub mod classifier;
pub mod metadata;
pub mod vectorizer;

pub use artifact::{ArtifactStore, MODEL_FILE, METADATA_FILE, VECTORIZER_FILE, save_artifacts};
pub use bayes::{CLASS_HAM, CLASS_SPAM, MultinomialNb};
pub use classifier::{ClassifierCell, Confidence, ConfidencePercentage, Label, Prediction, SpamClassifier};
pub use metadata::ModelMetadata;
pub use vectorizer::TfIdfVectorizer;
