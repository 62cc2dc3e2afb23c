//! Alphanumeric filter implementation.
//!
//! Drops any token that is not purely alphanumeric. Tokens containing
//! punctuation, symbols, or mixed non-alphanumeric characters are removed
//! entirely rather than partially cleaned, matching the behavior the
//! classifier's vocabulary was built with.
//!
//! # Examples
//!
//! ```
//! use smish::analysis::token::Token;
//! use smish::analysis::token_filter::{AlphanumericFilter, Filter};
//!
//! let filter = AlphanumericFilter::new();
//! let tokens = vec![
//!     Token::new("hello", 0),
//!     Token::new("don't", 1),
//!     Token::new("1000", 2),
//! ];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "hello");
//! assert_eq!(result[1].text, "1000");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only purely alphanumeric tokens.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .filter(|token| {
                !token.text.is_empty() && token.text.chars().all(char::is_alphanumeric)
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
