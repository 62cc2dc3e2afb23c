//! # smish
//!
//! SMS spam detection: a deterministic text-normalization pipeline and a
//! pre-trained TF-IDF + multinomial naive Bayes classifier, exposed
//! through a small HTTP API and a CLI.
//!
//! ## Components
//!
//! - [`analysis`] - tokenization, stop-word removal, Porter stemming
//! - [`model`] - trained artifacts, loading/resolution, inference
//! - [`train`] - offline fitting of the artifact pair
//! - [`server`] - axum HTTP service
//! - [`cli`] - clap command line interface

pub mod analysis;
pub mod cli;
pub mod error;
pub mod model;
pub mod server;
pub mod train;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
