//! Length filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens shorter than a minimum character length.
///
/// Very short tokens ("is", "of", leftover fragments) are almost never
/// keyphrase material. The default minimum of 4 characters matches the
/// candidate pipeline defaults.
///
/// # Examples
///
/// ```
/// use quillon::analysis::token::Token;
/// use quillon::analysis::token_filter::{Filter, LengthFilter};
///
/// let filter = LengthFilter::new(); // minimum 4 characters
/// let tokens = vec![Token::new("ion", 0), Token::new("ionization", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "ionization");
/// ```
#[derive(Clone, Debug)]
pub struct LengthFilter {
    /// Minimum token length in characters (inclusive).
    min_length: usize,
}

/// Default minimum candidate token length in characters.
pub const DEFAULT_MIN_LENGTH: usize = 4;

impl LengthFilter {
    /// Create a new length filter with the default minimum length.
    pub fn new() -> Self {
        Self::with_min_length(DEFAULT_MIN_LENGTH)
    }

    /// Create a new length filter with a custom minimum length.
    pub fn with_min_length(min_length: usize) -> Self {
        LengthFilter { min_length }
    }

    /// Get the minimum length enforced by this filter.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let filtered: Vec<Token> = tokens
            .filter(|token| token.text.chars().count() >= min_length)
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
