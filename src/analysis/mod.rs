//! Text analysis pipeline for SMS messages.
//!
//! Raw message text flows through a tokenizer and a chain of token
//! filters, producing the normalized token string the classifier operates
//! on:
//!
//! ```text
//! Raw Text → Tokenizer → Lowercase → Alphanumeric → Stop → Stem → Join
//! ```

pub mod analyzer;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use normalizer::Normalizer;
pub use token::{Token, TokenStream};
