//! Token filter implementations for the normalization pipeline.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform a token stream.
pub trait Filter: Send + Sync {
    /// Filter the given token stream, producing a new one.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;
pub mod lowercase;
pub mod stem;
pub mod stop;

pub use alphanumeric::AlphanumericFilter;
pub use lowercase::LowercaseFilter;
pub use stem::StemFilter;
pub use stop::StopFilter;
