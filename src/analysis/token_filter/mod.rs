//! Token filter implementations for token transformation.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod char_class;
pub mod length;
pub mod lowercase;
pub mod shingle;
pub mod stem;
pub mod stop;

// Re-export all filters for convenient access
pub use char_class::CharClassFilter;
pub use length::LengthFilter;
pub use lowercase::LowercaseFilter;
pub use shingle::ShingleFilter;
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
