//! TF-IDF vectorizer over a frozen vocabulary.
//!
//! Maps a normalized token string to a fixed-length feature vector:
//! raw term counts weighted by smoothed inverse document frequency, then
//! L2-normalized. The vocabulary and IDF weights are frozen at training
//! time; [`TfIdfVectorizer::transform`] never mutates them, and terms not
//! seen during training are ignored.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmishError};

/// A fitted TF-IDF vectorizer.
///
/// Immutable after [`fit`](TfIdfVectorizer::fit); deserialized once at
/// process startup and shared read-only for the process lifetime.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Term → feature index, assigned in sorted term order.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per feature index.
    idf: Vec<f64>,
    /// Number of documents seen during fitting.
    n_documents: usize,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .finish()
    }
}

/// Feature terms are whitespace-separated tokens of at least two
/// characters, the token rule the original artifacts were fitted with.
fn feature_terms(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split_whitespace()
        .filter(|term| term.chars().count() > 1)
}

impl TfIdfVectorizer {
    /// Fit a vectorizer on normalized training documents, keeping at most
    /// `max_features` terms (the most frequent across the corpus, ties
    /// broken lexicographically).
    pub fn fit(documents: &[String], max_features: usize) -> Result<Self> {
        if documents.is_empty() {
            return Err(SmishError::training("no documents to fit vectorizer on"));
        }
        if max_features == 0 {
            return Err(SmishError::training("max_features must be positive"));
        }

        let mut term_counts: HashMap<&str, usize> = HashMap::new();
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();

        for doc in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in feature_terms(doc) {
                *term_counts.entry(term).or_insert(0) += 1;
                if seen.insert(term) {
                    *document_frequency.entry(term).or_insert(0) += 1;
                }
            }
        }

        // Most frequent terms first, then alphabetical for determinism.
        let mut ranked: Vec<(&str, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);

        // Feature indices follow sorted term order.
        let mut terms: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort_unstable();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let n = documents.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = *document_frequency.get(term.as_str()).unwrap_or(&0) as f64;
            idf[idx] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        Ok(TfIdfVectorizer {
            vocabulary,
            idf,
            n_documents: documents.len(),
        })
    }

    /// Transform a normalized document into a TF-IDF feature vector.
    ///
    /// Unknown terms are ignored. An empty document produces an all-zero
    /// vector, which is a valid input for the classifier.
    pub fn transform(&self, normalized: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.vocabulary.len()];

        for term in feature_terms(normalized) {
            if let Some(&idx) = self.vocabulary.get(term) {
                features[idx] += 1.0;
            }
        }

        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm: f64 = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Look up the feature index of a term.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}
