//! Word n-gram (shingle) filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that expands a token stream with word n-grams.
///
/// For every surviving token the filter also emits the contiguous windows of
/// up to `max_size` adjacent tokens starting there, with the constituent
/// texts joined by a single space. Each shingle carries the byte span
/// covering all of its constituents and a joined surface form, so multi-word
/// candidates can still be matched against literal gold keyphrases.
///
/// Adjacency means adjacency in the *filtered* stream: tokens removed by
/// earlier filters (stop words, short tokens) do not break a window, which
/// is exactly the candidate-generation behavior wanted here.
///
/// # Examples
///
/// ```
/// use quillon::analysis::token::Token;
/// use quillon::analysis::token_filter::{Filter, ShingleFilter};
///
/// let filter = ShingleFilter::new(3);
/// let tokens = vec![
///     Token::with_offsets("machine", 0, 0, 7),
///     Token::with_offsets("learning", 1, 8, 16),
/// ];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
/// let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
///
/// assert_eq!(texts, vec!["machine", "machine learning", "learning"]);
/// assert_eq!(result[1].start_offset, 0);
/// assert_eq!(result[1].end_offset, 16);
/// ```
#[derive(Clone, Debug)]
pub struct ShingleFilter {
    /// Maximum number of adjacent tokens joined into one shingle.
    max_size: usize,
}

/// Default maximum shingle size in words.
pub const DEFAULT_MAX_SIZE: usize = 3;

impl ShingleFilter {
    /// Create a new shingle filter emitting windows of up to `max_size`
    /// words. A `max_size` of 1 leaves the stream unchanged.
    pub fn new(max_size: usize) -> Self {
        ShingleFilter {
            max_size: max_size.max(1),
        }
    }

    /// Get the maximum shingle size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for ShingleFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}

impl Filter for ShingleFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let input: Vec<Token> = tokens.collect();
        let mut output = Vec::with_capacity(input.len() * self.max_size);

        for start in 0..input.len() {
            output.push(input[start].clone());

            for size in 2..=self.max_size {
                let end = start + size;
                if end > input.len() {
                    break;
                }
                let window = &input[start..end];

                let text = window
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let original = window
                    .iter()
                    .map(|t| t.unstemmed())
                    .collect::<Vec<_>>()
                    .join(" ");

                let shingle = Token::with_offsets(
                    text,
                    window[0].position,
                    window[0].start_offset,
                    window[size - 1].end_offset,
                )
                .with_original_text(original);
                output.push(shingle);
            }
        }

        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "shingle"
    }
}
