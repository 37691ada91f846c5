//! Character-class filter implementation.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{QuillonError, Result};

/// A filter that removes tokens containing disallowed characters.
///
/// The default pattern rejects any token with characters outside
/// `[A-Za-z0-9-]`, which drops numbers-with-punctuation, URLs that survived
/// tokenization, and non-Latin noise.
///
/// # Examples
///
/// ```
/// use quillon::analysis::token::Token;
/// use quillon::analysis::token_filter::{CharClassFilter, Filter};
///
/// let filter = CharClassFilter::new().unwrap();
/// let tokens = vec![Token::new("alpha", 0), Token::new("beta_2", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "alpha");
/// ```
#[derive(Clone, Debug)]
pub struct CharClassFilter {
    /// Matches any disallowed character; tokens containing a match are dropped.
    reject: Arc<Regex>,
}

impl CharClassFilter {
    /// Create a new filter with the default allowed class `[A-Za-z0-9-]`.
    pub fn new() -> Result<Self> {
        Self::with_reject_pattern("[^A-Za-z0-9-]")
    }

    /// Create a new filter with a custom rejection pattern. Any token the
    /// pattern matches anywhere is removed from the stream.
    pub fn with_reject_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| QuillonError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(CharClassFilter {
            reject: Arc::new(regex),
        })
    }
}

impl Filter for CharClassFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let reject = Arc::clone(&self.reject);
        let filtered: Vec<Token> = tokens.filter(|token| !reject.is_match(&token.text)).collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "char_class"
    }
}
