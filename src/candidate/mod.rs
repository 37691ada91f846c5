//! Candidate aggregation and per-candidate feature computation.
//!
//! The analysis pipeline produces one token per *occurrence*; this module
//! collapses those occurrences into one [`Candidate`] per distinct value and
//! computes the document-level metrics the scorers consume: normalized
//! frequency, first-occurrence position, positional spread, and (at
//! extraction time) corpus IDF.

mod features;
mod labeling;

pub use features::{Candidate, CandidateFeatures, aggregate, annotate_idf, annotate_priors};
pub use labeling::{GoldVariants, canonicalize};
