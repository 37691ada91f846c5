//! Cooccurrence matrix over gold keyphrase sets.

use std::collections::HashMap;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Symmetric pair statistics between terms that were assigned together.
///
/// During training, each document's gold keyphrase set is treated as one
/// "basket": every unordered pair within the set increments its joint count
/// and every member increments its marginal count. After training,
/// [`make_relative_scores`](CooccurrenceMatrix::make_relative_scores)
/// freezes the matrix for extraction use.
///
/// Pair counts are stored under the lexicographically smaller term first,
/// so `count(a, b) == count(b, a)` by construction.
///
/// # Query ordering
///
/// Queries before the freeze are not an error: they compute the same
/// association measure on the fly from the raw counts. The freeze fixes the
/// Laplace vocabulary size so smoothed probabilities stay stable across
/// repeated queries, and precomputes the neighbor scores.
///
/// # Examples
///
/// ```
/// use ahash::AHashSet;
/// use quillon::corpus::CooccurrenceMatrix;
///
/// let mut matrix = CooccurrenceMatrix::new();
/// let gold: AHashSet<String> = ["quick".to_string(), "fox".to_string()].into_iter().collect();
/// matrix.add_all(&gold);
/// matrix.make_relative_scores();
///
/// assert_eq!(matrix.count("quick", "fox"), 1);
/// assert_eq!(matrix.count("fox", "quick"), 1);
/// let p = matrix.conditional_probability_laplace("quick", "fox");
/// assert!(p > 0.0 && p <= 1.0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CooccurrenceMatrix {
    /// Joint counts keyed by the lexicographically smaller term first.
    /// Invariant: `pair_counts[(a,b)] <= min(marginals[a], marginals[b])`.
    pair_counts: HashMap<String, HashMap<String, u64>>,
    /// Per-term marginal counts.
    marginals: HashMap<String, u64>,
    /// Relative correlation scores, precomputed at freeze time.
    relative_scores: HashMap<String, HashMap<String, f64>>,
    /// Vocabulary size fixed at freeze time; used as the Laplace `V`.
    frozen_vocabulary: Option<usize>,
}

impl CooccurrenceMatrix {
    /// Create a new, empty matrix.
    pub fn new() -> Self {
        CooccurrenceMatrix::default()
    }

    /// Register one training document's gold keyphrase set.
    ///
    /// Every unordered pair `{a, b}` with `a != b` increments its joint
    /// count; every member increments its marginal count.
    pub fn add_all(&mut self, terms: &AHashSet<String>) {
        let mut sorted: Vec<&String> = terms.iter().collect();
        sorted.sort();

        for (i, a) in sorted.iter().enumerate() {
            *self.marginals.entry((*a).clone()).or_insert(0) += 1;
            for b in &sorted[i + 1..] {
                *self
                    .pair_counts
                    .entry((*a).clone())
                    .or_default()
                    .entry((*b).clone())
                    .or_insert(0) += 1;
            }
        }
    }

    /// Raw joint count of two terms; 0 if never observed together.
    pub fn count(&self, a: &str, b: &str) -> u64 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.pair_counts
            .get(lo)
            .and_then(|inner| inner.get(hi))
            .copied()
            .unwrap_or(0)
    }

    /// Marginal count of a term; 0 if unseen.
    pub fn marginal(&self, term: &str) -> u64 {
        self.marginals.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms observed.
    pub fn num_terms(&self) -> usize {
        self.marginals.len()
    }

    /// Whether [`make_relative_scores`](Self::make_relative_scores) ran.
    pub fn is_frozen(&self) -> bool {
        self.frozen_vocabulary.is_some()
    }

    /// Laplace-smoothed estimate of `P(b | a)`:
    /// `(count(a, b) + 1) / (marginal(a) + V)`.
    ///
    /// `V` is the vocabulary size fixed at freeze time (the live vocabulary
    /// size before freezing, clamped to at least 1), so any pair, including
    /// unseen ones, gets a strictly positive probability in `(0, 1]`.
    pub fn conditional_probability_laplace(&self, a: &str, b: &str) -> f64 {
        let vocabulary = self
            .frozen_vocabulary
            .unwrap_or_else(|| self.marginals.len())
            .max(1);
        (self.count(a, b) + 1) as f64 / (self.marginal(a) + vocabulary as u64) as f64
    }

    /// Relative correlation of two terms:
    /// `count(a, b) / sqrt(marginal(a) * marginal(b))`, a symmetric
    /// association measure in `[0, 1]`. Zero for unseen terms or pairs.
    pub fn relative_score(&self, a: &str, b: &str) -> f64 {
        let joint = self.count(a, b);
        if joint == 0 {
            return 0.0;
        }
        let denom = ((self.marginal(a) * self.marginal(b)) as f64).sqrt();
        joint as f64 / denom
    }

    /// The `k` terms most strongly associated with `term`, ranked by
    /// relative correlation descending; ties broken by term string
    /// ascending for determinism.
    pub fn highest(&self, term: &str, k: usize) -> Vec<(String, f64)> {
        let mut neighbors: Vec<(String, f64)> = if let Some(scores) = self.relative_scores.get(term)
        {
            scores.iter().map(|(t, s)| (t.clone(), *s)).collect()
        } else if self.is_frozen() {
            Vec::new()
        } else {
            self.neighbor_terms(term)
                .into_iter()
                .map(|t| {
                    let score = self.relative_score(term, &t);
                    (t, score)
                })
                .collect()
        };

        neighbors.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        neighbors.truncate(k);
        neighbors
    }

    /// One-shot normalization after all training documents are seen.
    ///
    /// Fixes the Laplace vocabulary size and precomputes relative
    /// correlation scores for neighbor queries. Idempotent: calling it
    /// twice does not change any score.
    pub fn make_relative_scores(&mut self) {
        if self.is_frozen() {
            return;
        }
        self.frozen_vocabulary = Some(self.marginals.len());

        let mut relative: HashMap<String, HashMap<String, f64>> = HashMap::new();
        for (lo, inner) in &self.pair_counts {
            for hi in inner.keys() {
                let score = self.relative_score(lo, hi);
                relative
                    .entry(lo.clone())
                    .or_default()
                    .insert(hi.clone(), score);
                relative
                    .entry(hi.clone())
                    .or_default()
                    .insert(lo.clone(), score);
            }
        }
        self.relative_scores = relative;
    }

    /// Clear all statistics back to the untrained state.
    pub fn reset(&mut self) {
        self.pair_counts.clear();
        self.marginals.clear();
        self.relative_scores.clear();
        self.frozen_vocabulary = None;
    }

    /// All terms that ever co-occurred with `term` (unfrozen path).
    fn neighbor_terms(&self, term: &str) -> Vec<String> {
        let mut result = Vec::new();
        if let Some(inner) = self.pair_counts.get(term) {
            result.extend(inner.keys().cloned());
        }
        for (lo, inner) in &self.pair_counts {
            if lo.as_str() < term && inner.contains_key(term) {
                result.push(lo.clone());
            }
        }
        result
    }
}
