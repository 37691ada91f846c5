//! Token types for text analysis.
//!
//! A [`Token`] is one candidate occurrence flowing through the analysis
//! pipeline. It records the (possibly stemmed) text, its position in the
//! token stream, and the byte offsets of the occurrence in the original
//! document. Filters that rewrite the text (stemming, n-gram expansion) keep
//! the original surface form in `original_text` so candidates can later be
//! matched against literal gold keyphrases.
//!
//! # Examples
//!
//! ```
//! use quillon::analysis::token::Token;
//!
//! let token = Token::with_offsets("retrieval", 1, 12, 21);
//! assert_eq!(token.text, "retrieval");
//! assert_eq!(token.start_offset, 12);
//! assert_eq!(token.end_offset, 21);
//! assert!(token.original_text.is_none());
//!
//! let stemmed = token.with_text("retriev").with_original_text("retrieval");
//! assert_eq!(stemmed.text, "retriev");
//! assert_eq!(stemmed.unstemmed(), "retrieval");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single candidate occurrence after tokenization.
///
/// # Fields
///
/// - `text` - The token's (possibly stemmed) text content
/// - `position` - Position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `original_text` - Surface form before stemming, if a filter rewrote it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The position of the token in the token stream (0-based).
    pub position: usize,

    /// The byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text.
    pub end_offset: usize,

    /// The surface form before any text-rewriting filter ran, if different.
    pub original_text: Option<String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            original_text: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            original_text: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the original surface form of this token.
    pub fn with_original_text<S: Into<String>>(mut self, original: S) -> Self {
        self.original_text = Some(original.into());
        self
    }

    /// The surface form of this token: `original_text` if a filter rewrote
    /// the text, otherwise the text itself.
    pub fn unstemmed(&self) -> &str {
        self.original_text.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert!(token.original_text.is_none());
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_unstemmed_fallback() {
        let token = Token::new("running", 0);
        assert_eq!(token.unstemmed(), "running");

        let stemmed = token.with_text("run").with_original_text("running");
        assert_eq!(stemmed.text, "run");
        assert_eq!(stemmed.unstemmed(), "running");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
