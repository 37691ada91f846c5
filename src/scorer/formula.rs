//! Closed-form ranking formula scorer.

use crate::candidate::Candidate;
use crate::error::Result;
use crate::keyphrase::Keyphrase;
use crate::scorer::Scorer;

/// Scores candidates with a fixed ranking formula:
///
/// ```text
/// weight = frequency * idf * prior * pos_penalty * spread_penalty * term_count²
/// ```
///
/// The two penalties are hard zero/one gates encoding the observation that
/// keyphrases cluster near the top of a document and stay localized:
/// a candidate first appearing after `first_cutoff` of the document is
/// zeroed, as is one spread across `spread_cutoff` or more of it. The
/// squared term count favors multi-word candidates.
///
/// # Examples
///
/// ```
/// use quillon::scorer::FormulaScorer;
///
/// let scorer = FormulaScorer::new();
/// assert_eq!(scorer.first_cutoff(), 0.1);
/// assert_eq!(scorer.spread_cutoff(), 0.25);
///
/// // relax the position gate for short documents
/// let scorer = FormulaScorer::with_cutoffs(1.0, 1.0);
/// assert_eq!(scorer.first_cutoff(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct FormulaScorer {
    /// Candidates whose first occurrence is past this fraction of the
    /// document are zeroed out.
    first_cutoff: f64,
    /// Candidates spread over at least this fraction of the document are
    /// zeroed out.
    spread_cutoff: f64,
}

/// Default first-occurrence cutoff.
pub const DEFAULT_FIRST_CUTOFF: f64 = 0.1;

/// Default spread cutoff.
pub const DEFAULT_SPREAD_CUTOFF: f64 = 0.25;

impl FormulaScorer {
    /// Create a formula scorer with the default cutoffs.
    pub fn new() -> Self {
        Self::with_cutoffs(DEFAULT_FIRST_CUTOFF, DEFAULT_SPREAD_CUTOFF)
    }

    /// Create a formula scorer with custom penalty cutoffs.
    pub fn with_cutoffs(first_cutoff: f64, spread_cutoff: f64) -> Self {
        FormulaScorer {
            first_cutoff,
            spread_cutoff,
        }
    }

    /// Get the first-occurrence cutoff.
    pub fn first_cutoff(&self) -> f64 {
        self.first_cutoff
    }

    /// Get the spread cutoff.
    pub fn spread_cutoff(&self) -> f64 {
        self.spread_cutoff
    }
}

impl Default for FormulaScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for FormulaScorer {
    fn score(&self, candidates: &[Candidate]) -> Result<Vec<Keyphrase>> {
        let keyphrases = candidates
            .iter()
            .map(|candidate| {
                let f = candidate.features;
                let pos_penalty = if f.first > self.first_cutoff { 0.0 } else { 1.0 };
                let spread_penalty = if f.spread >= self.spread_cutoff { 0.0 } else { 1.0 };
                let weight = f.frequency
                    * f.idf
                    * f.prior
                    * pos_penalty
                    * spread_penalty
                    * f.term_count.powi(2);
                Keyphrase::new(candidate.value.clone(), weight)
            })
            .collect();

        Ok(keyphrases)
    }

    fn name(&self) -> &'static str {
        "formula"
    }
}
