//! The message normalizer.
//!
//! [`Normalizer`] maps raw message text to the normalized token string the
//! classifier was trained on. The pipeline, in this exact order:
//!
//! 1. Tokenize on Unicode word boundaries.
//! 2. Lowercase.
//! 3. Drop tokens that are not purely alphanumeric.
//! 4. Drop English stop words.
//! 5. Porter-stem each survivor.
//! 6. Join with single spaces, preserving order.
//!
//! The same `Normalizer` is used at training time and at inference time;
//! the two must never diverge or the learned feature weights become
//! meaningless.
//!
//! # Examples
//!
//! ```
//! use smish::analysis::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! let normalized = normalizer.normalize("I'm running to the meeting!").unwrap();
//! assert_eq!(normalized, "run meet");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::{AlphanumericFilter, LowercaseFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::WordTokenizer;
use crate::error::{Result, SmishError};

/// Deterministic text normalizer for SMS messages.
///
/// Pure and referentially transparent: no I/O, no external state. All
/// language data (stop words, stemming rules) is compiled in.
#[derive(Debug)]
pub struct Normalizer {
    analyzer: PipelineAnalyzer,
}

impl Normalizer {
    /// Create a normalizer with the standard SMS pipeline.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphanumericFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(StemFilter::new()));

        Normalizer { analyzer }
    }

    /// Normalize raw text into a space-joined string of stemmed tokens.
    ///
    /// Empty input, or input consisting only of stop words and
    /// punctuation, yields an empty string; that is a valid value, not an
    /// error, and the downstream classifier scores it as an all-zero
    /// feature vector.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let tokens = self.analyzer.analyze(text)?;
        let words: Vec<String> = tokens.map(|token| token.text).collect();
        Ok(words.join(" "))
    }

    /// One-time startup probe: run the pipeline on a known input and fail
    /// loudly if it misbehaves. Replaces the original deployment's
    /// best-effort language-data download.
    pub fn verify(&self) -> Result<()> {
        let probe = self.normalize("The quick brown fox is running")?;
        if probe != "quick brown fox run" {
            return Err(SmishError::inference(format!(
                "normalizer verification failed: probe produced {probe:?}"
            )));
        }
        Ok(())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_spam_message() {
        let normalizer = Normalizer::new();
        let normalized = normalizer
            .normalize("Congratulations! You have won $1000. Click here to claim now!")
            .unwrap();

        // "you", "have", "won", "here", "to", "now" are stop words; "$" is
        // split from "1000" and dropped as punctuation.
        assert_eq!(normalized, "congratul 1000 click claim");
    }

    #[test]
    fn test_normalize_ham_message() {
        let normalizer = Normalizer::new();
        let normalized = normalizer
            .normalize("Meeting at 3pm in conference room B")
            .unwrap();

        assert_eq!(normalized, "meet 3pm confer room b");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("").unwrap(), "");
    }

    #[test]
    fn test_stop_words_and_punctuation_only() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("the is and ... !!!").unwrap(), "");
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let normalizer = Normalizer::new();
        let inputs = [
            "Congratulations! You have won $1000. Click here to claim now!",
            "Meeting at 3pm in conference room B",
            "Free entry in 2 a wkly comp to win FA Cup final tkts",
            "",
        ];

        for input in inputs {
            let once = normalizer.normalize(input).unwrap();
            let twice = normalizer.normalize(&once).unwrap();
            assert_eq!(once, twice, "normalize must be idempotent for {input:?}");
        }
    }

    #[test]
    fn test_verify() {
        let normalizer = Normalizer::new();
        assert!(normalizer.verify().is_ok());
    }
}
