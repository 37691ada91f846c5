//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod candidate;
mod pipeline;

pub use analyzer::Analyzer;
pub use candidate::{CandidateAnalyzer, CandidateAnalyzerOptions};
pub use pipeline::PipelineAnalyzer;
