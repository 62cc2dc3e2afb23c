//! Offline training: corpus loading, fitting, and evaluation.
//!
//! Produces the artifact pair the service loads at startup. The corpus
//! format is one record per line, `label<TAB>text`, with labels `ham` or
//! `spam` (the SMS Spam Collection layout). Texts are normalized with the
//! same [`Normalizer`] the service uses at inference time — training and
//! inference must share the pipeline or the learned weights are
//! meaningless.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::analysis::Normalizer;
use crate::error::{Result, SmishError};
use crate::model::bayes::{CLASS_SPAM, MultinomialNb};
use crate::model::metadata::ModelMetadata;
use crate::model::vectorizer::TfIdfVectorizer;

/// One labeled training example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRecord {
    /// Class index, 0 = ham, 1 = spam.
    pub label: usize,
    /// Raw message text.
    pub text: String,
}

/// Training options.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Vocabulary cap for the vectorizer.
    pub max_features: usize,
    /// Fraction of examples held out for evaluation.
    pub test_fraction: f64,
    /// Laplace smoothing factor for the classifier.
    pub alpha: f64,
    /// Seed for the train/test shuffle.
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        TrainOptions {
            max_features: 3000,
            test_fraction: 0.2,
            alpha: 1.0,
            seed: 2,
        }
    }
}

/// Hold-out evaluation metrics.
#[derive(Debug, Clone, Copy)]
pub struct EvalMetrics {
    /// Fraction of hold-out examples predicted correctly.
    pub accuracy: f64,
    /// Of the examples predicted spam, the fraction that were spam.
    /// 0.0 when nothing was predicted spam.
    pub precision: f64,
    /// Number of hold-out examples.
    pub test_examples: usize,
}

/// A completed training run.
#[derive(Debug)]
pub struct TrainedModel {
    pub vectorizer: TfIdfVectorizer,
    pub model: MultinomialNb,
    pub metadata: ModelMetadata,
    pub metrics: EvalMetrics,
}

/// Read a `label<TAB>text` corpus file. Blank lines are skipped; an
/// unknown label or a missing tab is a training error naming the line.
pub fn load_corpus(path: &Path) -> Result<Vec<CorpusRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (label, text) = line.split_once('\t').ok_or_else(|| {
            SmishError::training(format!(
                "line {}: expected label<TAB>text",
                number + 1
            ))
        })?;

        let label = match label.trim() {
            "ham" => 0,
            "spam" => 1,
            other => {
                return Err(SmishError::training(format!(
                    "line {}: unknown label {other:?}",
                    number + 1
                )));
            }
        };

        records.push(CorpusRecord {
            label,
            text: text.trim().to_string(),
        });
    }

    Ok(records)
}

/// Drop exact duplicate records, keeping the first occurrence.
fn deduplicate(records: &[CorpusRecord]) -> Vec<CorpusRecord> {
    let mut seen: HashSet<(usize, &str)> = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert((record.label, record.text.as_str())))
        .cloned()
        .collect()
}

/// Fit the vectorizer and classifier on a labeled corpus and evaluate on
/// a seeded hold-out split.
pub fn train(records: &[CorpusRecord], options: &TrainOptions) -> Result<TrainedModel> {
    let records = deduplicate(records);
    if records.len() < 10 {
        return Err(SmishError::training(format!(
            "corpus too small: need at least 10 unique examples, got {}",
            records.len()
        )));
    }

    let normalizer = Normalizer::new();
    let documents: Vec<String> = records
        .iter()
        .map(|record| normalizer.normalize(&record.text))
        .collect::<Result<_>>()?;
    let labels: Vec<usize> = records.iter().map(|record| record.label).collect();

    // The vectorizer is fitted on the full corpus, the classifier only on
    // the training split.
    let vectorizer = TfIdfVectorizer::fit(&documents, options.max_features)?;
    let features: Vec<Vec<f64>> = documents
        .iter()
        .map(|doc| vectorizer.transform(doc))
        .collect();

    let mut indices: Vec<usize> = (0..records.len()).collect();
    let mut rng = StdRng::seed_from_u64(options.seed);
    indices.shuffle(&mut rng);

    let test_len = ((records.len() as f64) * options.test_fraction).round() as usize;
    let test_len = test_len.clamp(1, records.len() - 2);
    let (test_idx, train_idx) = indices.split_at(test_len);

    let train_features: Vec<Vec<f64>> =
        train_idx.iter().map(|&i| features[i].clone()).collect();
    let train_labels: Vec<usize> = train_idx.iter().map(|&i| labels[i]).collect();

    let model = MultinomialNb::fit(&train_features, &train_labels, options.alpha)?;
    let metrics = evaluate(&model, &features, &labels, test_idx)?;

    log::info!(
        "trained on {} examples, {} features; hold-out accuracy {:.4}, precision {:.4}",
        train_idx.len(),
        vectorizer.vocabulary_size(),
        metrics.accuracy,
        metrics.precision
    );

    let mut validation_metrics = HashMap::new();
    validation_metrics.insert("accuracy".to_string(), metrics.accuracy);
    validation_metrics.insert("precision".to_string(), metrics.precision);

    let metadata = ModelMetadata {
        name: "sms-spam".to_string(),
        version: crate::VERSION.to_string(),
        trained_at: chrono::Utc::now(),
        training_examples: train_idx.len(),
        features: vectorizer.vocabulary_size(),
        validation_metrics,
    };

    Ok(TrainedModel {
        vectorizer,
        model,
        metadata,
        metrics,
    })
}

fn evaluate(
    model: &MultinomialNb,
    features: &[Vec<f64>],
    labels: &[usize],
    test_idx: &[usize],
) -> Result<EvalMetrics> {
    let mut correct = 0usize;
    let mut true_positives = 0usize;
    let mut predicted_positives = 0usize;

    for &i in test_idx {
        let (predicted, _) = model.predict(&features[i])?;
        if predicted == labels[i] {
            correct += 1;
        }
        if predicted == CLASS_SPAM {
            predicted_positives += 1;
            if labels[i] == CLASS_SPAM {
                true_positives += 1;
            }
        }
    }

    let accuracy = correct as f64 / test_idx.len() as f64;
    let precision = if predicted_positives > 0 {
        true_positives as f64 / predicted_positives as f64
    } else {
        0.0
    };

    Ok(EvalMetrics {
        accuracy,
        precision,
        test_examples: test_idx.len(),
    })
}
