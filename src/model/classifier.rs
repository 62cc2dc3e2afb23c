//! The spam classifier: normalization, vectorization, and prediction.
//!
//! [`SpamClassifier`] owns the normalizer and the two loaded artifacts.
//! It is constructed once at startup and shared read-only (behind an
//! `Arc`) across every concurrent request; nothing here mutates after
//! construction, so no locking is needed.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::analysis::Normalizer;
use crate::error::{Result, SmishError};
use crate::model::bayes::{CLASS_SPAM, MultinomialNb};
use crate::model::vectorizer::TfIdfVectorizer;

/// Predicted message class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Not spam.
    Ham,
    /// Spam.
    Spam,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

/// Raw class probabilities, summing to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Confidence {
    pub ham: f64,
    pub spam: f64,
}

/// Percentage-formatted class probabilities, e.g. `"96.58%"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidencePercentage {
    pub ham: String,
    pub spam: String,
}

/// The result of classifying one message. Created fresh per request,
/// never persisted or shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// The input text as received.
    pub original_text: String,
    /// The normalized token string the model actually scored.
    pub transformed_text: String,
    /// Predicted label.
    pub prediction: Label,
    /// Convenience flag, `prediction == spam`.
    pub is_spam: bool,
    /// Probability distribution over the two classes.
    pub confidence: Confidence,
    /// The same distribution formatted as percentages.
    pub confidence_percentage: ConfidencePercentage,
}

/// The classifier: a matched (vectorizer, model) pair plus the
/// normalization pipeline they were trained with.
pub struct SpamClassifier {
    normalizer: Normalizer,
    vectorizer: TfIdfVectorizer,
    model: MultinomialNb,
}

impl fmt::Debug for SpamClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpamClassifier")
            .field("features", &self.vectorizer.vocabulary_size())
            .finish()
    }
}

impl SpamClassifier {
    /// Construct a classifier from loaded artifacts.
    ///
    /// The pair must come from the same training run; a feature-count
    /// mismatch is rejected here as well as at load time.
    pub fn new(vectorizer: TfIdfVectorizer, model: MultinomialNb) -> Result<Self> {
        if model.n_features() != vectorizer.vocabulary_size() {
            return Err(SmishError::inference(format!(
                "mismatched artifacts: vectorizer has {} terms, classifier expects {} features",
                vectorizer.vocabulary_size(),
                model.n_features()
            )));
        }

        Ok(SpamClassifier {
            normalizer: Normalizer::new(),
            vectorizer,
            model,
        })
    }

    /// Classify one message.
    ///
    /// Deterministic and side-effect-free; concurrent calls share the
    /// immutable artifacts without coordination.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let transformed_text = self.normalizer.normalize(text)?;
        let features = self.vectorizer.transform(&transformed_text);
        let (class, proba) = self.model.predict(&features)?;

        let prediction = if class == CLASS_SPAM {
            Label::Spam
        } else {
            Label::Ham
        };

        Ok(Prediction {
            original_text: text.to_string(),
            transformed_text,
            prediction,
            is_spam: prediction == Label::Spam,
            confidence: Confidence {
                ham: proba[0],
                spam: proba[1],
            },
            confidence_percentage: ConfidencePercentage {
                ham: format!("{:.2}%", proba[0] * 100.0),
                spam: format!("{:.2}%", proba[1] * 100.0),
            },
        })
    }

    /// Number of features in the model's vocabulary.
    pub fn feature_count(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}

/// A write-once slot for the shared classifier.
///
/// Entry points create the cell up front, load artifacts, then fill it
/// before serving; a `predict` through an unfilled cell yields
/// [`SmishError::NotReady`] instead of a crash. This replaces the
/// ambient mutable globals of earlier deployments with one explicitly
/// constructed instance.
#[derive(Debug, Default)]
pub struct ClassifierCell {
    slot: OnceLock<Arc<SpamClassifier>>,
}

impl ClassifierCell {
    /// Create an empty cell.
    pub fn empty() -> Self {
        ClassifierCell {
            slot: OnceLock::new(),
        }
    }

    /// Create a cell already holding a classifier.
    pub fn loaded(classifier: SpamClassifier) -> Self {
        let cell = Self::empty();
        cell.slot
            .set(Arc::new(classifier))
            .expect("freshly created cell cannot be filled");
        cell
    }

    /// Fill the cell. Fails if it was already filled.
    pub fn fill(&self, classifier: SpamClassifier) -> Result<()> {
        self.slot
            .set(Arc::new(classifier))
            .map_err(|_| SmishError::inference("classifier already loaded"))
    }

    /// Whether artifacts have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Get the classifier, or `NotReady` if loading has not completed.
    pub fn get(&self) -> Result<Arc<SpamClassifier>> {
        self.slot.get().cloned().ok_or(SmishError::NotReady)
    }

    /// Classify one message through the cell.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        self.get()?.predict(text)
    }
}
