//! Candidate scoring strategies.
//!
//! A [`Scorer`] assigns each candidate a relevance weight, producing an
//! *unsorted* list of keyphrases; ranking, reranking and truncation happen
//! downstream in the extractor. Two interchangeable strategies exist:
//!
//! - [`FormulaScorer`] - a closed-form ranking formula over the candidate
//!   metrics.
//! - [`ClassifierScorer`] - a trained binary classifier whose positive-class
//!   posterior becomes the weight; rejected candidates are dropped.

mod classifier;
mod formula;

pub use classifier::{Classifier, ClassifierScorer, GaussianNb, TrainingInstance};
pub use formula::{DEFAULT_FIRST_CUTOFF, DEFAULT_SPREAD_CUTOFF, FormulaScorer};

use crate::candidate::Candidate;
use crate::error::Result;
use crate::keyphrase::Keyphrase;

/// Trait for strategies that turn feature-annotated candidates into
/// weighted keyphrases.
pub trait Scorer: Send + Sync {
    /// Score the candidates; the output is unsorted and may be shorter than
    /// the input (classifiers drop rejected candidates).
    fn score(&self, candidates: &[Candidate]) -> Result<Vec<Keyphrase>>;

    /// Get the name of this scorer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
