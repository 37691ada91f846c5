//! Candidate analyzer: the shared front half of training and extraction.
//!
//! Wires the keyphrase candidate generation stages in their fixed order:
//!
//! 1. Regex tokenization with byte offsets
//! 2. Stop word removal
//! 3. Minimum-length removal (default 4 chars)
//! 4. Character-class removal (anything outside `[A-Za-z0-9-]`)
//! 5. Case folding
//! 6. Stemming (surface form retained per token)
//! 7. Word n-gram expansion (default up to 3 words)
//!
//! # Examples
//!
//! ```
//! use quillon::analysis::analyzer::{Analyzer, CandidateAnalyzer};
//!
//! let analyzer = CandidateAnalyzer::new(Default::default()).unwrap();
//! let tokens: Vec<_> = analyzer
//!     .analyze("Neural networks learn representations")
//!     .unwrap()
//!     .collect();
//!
//! assert!(tokens.iter().any(|t| t.text == "neural network"));
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    CharClassFilter, LengthFilter, LowercaseFilter, ShingleFilter, StemFilter, Stemmer, StopFilter,
};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// Options for building a [`CandidateAnalyzer`].
#[derive(Clone, Debug)]
pub struct CandidateAnalyzerOptions {
    /// Minimum single-token length in characters.
    pub min_token_length: usize,
    /// Maximum n-gram size in words.
    pub max_ngram_size: usize,
    /// Custom stop word set; `None` uses the default English list.
    pub stop_words: Option<HashSet<String>>,
}

impl Default for CandidateAnalyzerOptions {
    fn default() -> Self {
        CandidateAnalyzerOptions {
            min_token_length: 4,
            max_ngram_size: 3,
            stop_words: None,
        }
    }
}

/// The preconfigured analyzer used for keyphrase candidate generation.
pub struct CandidateAnalyzer {
    inner: PipelineAnalyzer,
    stemmer: Arc<dyn Stemmer>,
}

impl CandidateAnalyzer {
    /// Create a new candidate analyzer.
    pub fn new(options: CandidateAnalyzerOptions) -> Result<Self> {
        let stop_filter = match options.stop_words {
            Some(words) => StopFilter::with_stop_words(words),
            None => StopFilter::new(),
        };
        let stem_filter = StemFilter::new();
        let stemmer = stem_filter.stemmer();

        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(LengthFilter::with_min_length(
                options.min_token_length,
            )))
            .add_filter(Arc::new(CharClassFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stem_filter))
            .add_filter(Arc::new(ShingleFilter::new(options.max_ngram_size)))
            .with_name("candidate".to_string());

        Ok(CandidateAnalyzer { inner, stemmer })
    }

    /// Get a shared handle to the stemmer used by this analyzer.
    pub fn stemmer(&self) -> Arc<dyn Stemmer> {
        Arc::clone(&self.stemmer)
    }

    /// Stem a whitespace-separated phrase the same way candidate values are
    /// stemmed: lowercase each word, stem it, and re-join with single spaces.
    /// Used to bring gold keyphrases into candidate-value space.
    pub fn stem_phrase(&self, phrase: &str) -> String {
        phrase
            .split_whitespace()
            .map(|word| self.stemmer.stem(&word.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Analyzer for CandidateAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "candidate"
    }
}

impl std::fmt::Debug for CandidateAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
