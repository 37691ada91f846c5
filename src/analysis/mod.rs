//! Text analysis pipeline: tokenization, filtering, stemming, n-gram
//! expansion.
//!
//! Analysis turns raw document text into a stream of candidate [`Token`]s,
//! each carrying its byte offsets in the original text. The pipeline is the
//! shared front half of both training and extraction: a [`Tokenizer`] splits
//! the text, and a chain of [`Filter`]s drops stop words, short tokens and
//! noisy character classes, stems the survivors (retaining the surface form
//! as a side channel), and expands adjacent tokens into word n-grams.
//!
//! [`Token`]: token::Token
//! [`Tokenizer`]: tokenizer::Tokenizer
//! [`Filter`]: token_filter::Filter

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
