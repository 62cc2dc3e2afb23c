//! Multinomial naive Bayes classifier for the two message classes.
//!
//! The class order is fixed: index 0 is ham, index 1 is spam. Parameters
//! are the class log priors and the per-class feature log likelihoods,
//! fitted with Laplace smoothing. `predict_proba` computes the joint
//! log-likelihood for each class and normalizes with log-sum-exp, so the
//! returned pair always sums to 1.0.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmishError};

/// Feature/class index of the ham class.
pub const CLASS_HAM: usize = 0;
/// Feature/class index of the spam class.
pub const CLASS_SPAM: usize = 1;

/// A fitted multinomial naive Bayes model over the TF-IDF feature space.
///
/// Immutable after [`fit`](MultinomialNb::fit); deserialized once at
/// process startup and shared read-only for the process lifetime. The
/// model is a matched pair with the vectorizer from the same training
/// run — the feature count must equal the vectorizer's vocabulary size.
#[derive(Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Log prior probability per class, `[ham, spam]`.
    class_log_prior: [f64; 2],
    /// Per-class log likelihood per feature, `[ham, spam]`.
    feature_log_prob: [Vec<f64>; 2],
}

impl std::fmt::Debug for MultinomialNb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultinomialNb")
            .field("n_features", &self.n_features())
            .field("class_log_prior", &self.class_log_prior)
            .finish()
    }
}

impl MultinomialNb {
    /// Fit the model on feature vectors and class labels (0 = ham,
    /// 1 = spam) with Laplace smoothing factor `alpha`.
    pub fn fit(features: &[Vec<f64>], labels: &[usize], alpha: f64) -> Result<Self> {
        if features.is_empty() {
            return Err(SmishError::training("no examples to fit classifier on"));
        }
        if features.len() != labels.len() {
            return Err(SmishError::training(format!(
                "feature/label length mismatch: {} vs {}",
                features.len(),
                labels.len()
            )));
        }
        if labels.iter().any(|&label| label > CLASS_SPAM) {
            return Err(SmishError::training("labels must be 0 (ham) or 1 (spam)"));
        }
        if !(alpha > 0.0) {
            return Err(SmishError::training("smoothing alpha must be positive"));
        }

        let n_features = features[0].len();
        let mut class_count = [0.0f64; 2];
        let mut feature_count = [vec![0.0f64; n_features], vec![0.0f64; n_features]];

        for (vector, &label) in features.iter().zip(labels) {
            if vector.len() != n_features {
                return Err(SmishError::training("ragged feature vectors"));
            }
            class_count[label] += 1.0;
            for (idx, &value) in vector.iter().enumerate() {
                feature_count[label][idx] += value;
            }
        }

        if class_count.iter().any(|&count| count == 0.0) {
            return Err(SmishError::training(
                "training corpus must contain both ham and spam examples",
            ));
        }

        let total = features.len() as f64;
        let class_log_prior = [
            (class_count[CLASS_HAM] / total).ln(),
            (class_count[CLASS_SPAM] / total).ln(),
        ];

        let feature_log_prob = feature_count.map(|counts| {
            let smoothed_total: f64 =
                counts.iter().sum::<f64>() + alpha * n_features as f64;
            counts
                .iter()
                .map(|&count| ((count + alpha) / smoothed_total).ln())
                .collect()
        });

        Ok(MultinomialNb {
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Number of features the model was fitted on.
    pub fn n_features(&self) -> usize {
        self.feature_log_prob[CLASS_HAM].len()
    }

    /// Class probability distribution `[ham, spam]` for a feature vector.
    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2]> {
        if features.len() != self.n_features() {
            return Err(SmishError::inference(format!(
                "feature vector has {} dimensions, model expects {}",
                features.len(),
                self.n_features()
            )));
        }

        let mut joint = [0.0f64; 2];
        for class in [CLASS_HAM, CLASS_SPAM] {
            let log_likelihood: f64 = features
                .iter()
                .zip(&self.feature_log_prob[class])
                .map(|(x, log_prob)| x * log_prob)
                .sum();
            joint[class] = self.class_log_prior[class] + log_likelihood;
        }

        // Normalize in log space to avoid underflow.
        let max = joint[CLASS_HAM].max(joint[CLASS_SPAM]);
        let exp = [(joint[CLASS_HAM] - max).exp(), (joint[CLASS_SPAM] - max).exp()];
        let sum = exp[CLASS_HAM] + exp[CLASS_SPAM];

        Ok([exp[CLASS_HAM] / sum, exp[CLASS_SPAM] / sum])
    }

    /// Discrete class prediction plus the probability distribution.
    ///
    /// Exact ties go to ham, the first-argmax convention.
    pub fn predict(&self, features: &[f64]) -> Result<(usize, [f64; 2])> {
        let proba = self.predict_proba(features)?;
        let class = if proba[CLASS_SPAM] > proba[CLASS_HAM] {
            CLASS_SPAM
        } else {
            CLASS_HAM
        };
        Ok((class, proba))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted_model() -> MultinomialNb {
        // Feature space: [spammy, hammy]
        let features = vec![
            vec![1.0, 0.0],
            vec![0.9, 0.1],
            vec![0.0, 1.0],
            vec![0.1, 0.9],
        ];
        let labels = vec![CLASS_SPAM, CLASS_SPAM, CLASS_HAM, CLASS_HAM];
        MultinomialNb::fit(&features, &labels, 1.0).unwrap()
    }

    #[test]
    fn test_fit_and_predict() {
        let model = fitted_model();
        assert_eq!(model.n_features(), 2);

        let (class, proba) = model.predict(&[1.0, 0.0]).unwrap();
        assert_eq!(class, CLASS_SPAM);
        assert!(proba[CLASS_SPAM] > proba[CLASS_HAM]);

        let (class, proba) = model.predict(&[0.0, 1.0]).unwrap();
        assert_eq!(class, CLASS_HAM);
        assert!(proba[CLASS_HAM] > proba[CLASS_SPAM]);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = fitted_model();
        for vector in [
            vec![1.0, 0.0],
            vec![0.5, 0.5],
            vec![0.0, 0.0],
            vec![0.3, 0.7],
        ] {
            let proba = model.predict_proba(&vector).unwrap();
            assert!((proba[CLASS_HAM] + proba[CLASS_SPAM] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_vector_falls_back_to_priors() {
        // Three spam, one ham: the prior decides an empty message.
        let features = vec![
            vec![1.0, 0.0],
            vec![0.8, 0.2],
            vec![0.9, 0.0],
            vec![0.0, 1.0],
        ];
        let labels = vec![CLASS_SPAM, CLASS_SPAM, CLASS_SPAM, CLASS_HAM];
        let model = MultinomialNb::fit(&features, &labels, 1.0).unwrap();

        let (class, proba) = model.predict(&[0.0, 0.0]).unwrap();
        assert_eq!(class, CLASS_SPAM);
        assert!((proba[CLASS_SPAM] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_tie_breaks_to_ham() {
        // Balanced classes with mirrored features: a symmetric vector ties.
        let features = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let labels = vec![CLASS_SPAM, CLASS_HAM];
        let model = MultinomialNb::fit(&features, &labels, 1.0).unwrap();

        let (class, proba) = model.predict(&[0.5, 0.5]).unwrap();
        assert_eq!(class, CLASS_HAM);
        assert!((proba[CLASS_HAM] - proba[CLASS_SPAM]).abs() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let model = fitted_model();
        assert!(model.predict_proba(&[1.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_single_class_corpus_fails() {
        let features = vec![vec![1.0, 0.0], vec![0.9, 0.1]];
        let labels = vec![CLASS_SPAM, CLASS_SPAM];
        assert!(MultinomialNb::fit(&features, &labels, 1.0).is_err());
    }
}
