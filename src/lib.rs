//! # Quillon
//!
//! A trainable keyphrase extraction library for Rust.
//!
//! Quillon turns a document into an ordered list of weighted keyphrase
//! candidates: tokenize, filter, stem, expand into word n-grams, compute
//! per-candidate statistics (frequency, position, spread, corpus IDF), score
//! via a closed-form formula or a trained classifier, rerank with a term-pair
//! cooccurrence matrix, optionally synthesize strongly associated phrases
//! that never appear literally in the text, and truncate to the top K.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Flexible text analysis pipeline (tokenizer + filter chain)
//! - Document-frequency corpus with IDF queries
//! - Cooccurrence matrix with Laplace-smoothed conditional probabilities
//! - Formula and classifier scoring strategies
//! - Parallel batch extraction once training is finalized
//!
//! ## Quick start
//!
//! ```
//! use std::collections::HashSet;
//! use quillon::extractor::{ExtractorConfig, KeyphraseExtractor};
//!
//! let mut extractor = KeyphraseExtractor::new(ExtractorConfig::default()).unwrap();
//!
//! let gold: HashSet<String> = ["information retrieval".to_string()].into();
//! extractor
//!     .train("information retrieval systems rank documents", &gold)
//!     .unwrap();
//! extractor.end_training().unwrap();
//!
//! let keyphrases = extractor
//!     .extract("modern information retrieval systems rank large document collections")
//!     .unwrap();
//! assert!(keyphrases.len() <= extractor.keyphrase_count());
//! ```

pub mod analysis;
pub mod candidate;
pub mod corpus;
pub mod error;
pub mod extractor;
pub mod keyphrase;
pub mod scorer;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
