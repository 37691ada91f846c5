//! Document-frequency corpus for IDF-style queries.

use std::collections::HashMap;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Accumulates document-frequency statistics across a training set.
///
/// Each call to [`add_document`](TermCorpus::add_document) counts one
/// document; every *unique* term in that document increments its document
/// count by one, so repeated occurrences within a single document count
/// once. Lookups for unseen terms degrade gracefully to zero instead of
/// erroring, keeping the extraction hot path exception-free.
///
/// The untrained state is explicit: [`idf`](TermCorpus::idf) returns `None`
/// while no documents have been added, and callers decide how to degrade.
///
/// # Examples
///
/// ```
/// use ahash::AHashSet;
/// use quillon::corpus::TermCorpus;
///
/// let mut corpus = TermCorpus::new();
/// let terms: AHashSet<String> = ["fox".to_string(), "quick".to_string()].into_iter().collect();
/// corpus.add_document(&terms);
///
/// assert_eq!(corpus.num_docs(), 1);
/// assert_eq!(corpus.count("fox"), 1);
/// assert_eq!(corpus.count("unseen"), 0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TermCorpus {
    /// Per-term document counts. Invariant: every value is <= `num_docs`.
    doc_counts: HashMap<String, u64>,
    /// Number of documents seen; increases by exactly one per training call.
    num_docs: u64,
}

impl TermCorpus {
    /// Create a new, empty corpus.
    pub fn new() -> Self {
        TermCorpus::default()
    }

    /// Register one document's unique term set.
    ///
    /// Increments the document counter and each term's document count.
    pub fn add_document(&mut self, terms: &AHashSet<String>) {
        self.num_docs += 1;
        for term in terms {
            *self.doc_counts.entry(term.clone()).or_insert(0) += 1;
        }
    }

    /// Document frequency of a term; 0 if unseen.
    pub fn count(&self, term: &str) -> u64 {
        self.doc_counts.get(term).copied().unwrap_or(0)
    }

    /// Number of documents added so far.
    pub fn num_docs(&self) -> u64 {
        self.num_docs
    }

    /// Number of distinct terms seen so far.
    pub fn num_terms(&self) -> usize {
        self.doc_counts.len()
    }

    /// Inverse document frequency: `ln(num_docs / max(1, count(term)))`.
    ///
    /// Returns `None` while the corpus is untrained (`num_docs == 0`); the
    /// value is undefined then and callers must decide how to degrade.
    pub fn idf(&self, term: &str) -> Option<f64> {
        if self.num_docs == 0 {
            return None;
        }
        let df = self.count(term).max(1);
        Some((self.num_docs as f64 / df as f64).ln())
    }

    /// Clear all statistics back to the untrained state.
    pub fn reset(&mut self) {
        self.doc_counts.clear();
        self.num_docs = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> AHashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_document_frequency_counts_once_per_document() {
        let mut corpus = TermCorpus::new();
        // "fox" unique within the set regardless of raw frequency
        corpus.add_document(&terms(&["fox", "quick"]));
        corpus.add_document(&terms(&["fox"]));

        assert_eq!(corpus.num_docs(), 2);
        assert_eq!(corpus.count("fox"), 2);
        assert_eq!(corpus.count("quick"), 1);
        assert_eq!(corpus.num_terms(), 2);
    }

    #[test]
    fn test_idf_untrained_is_undefined() {
        let corpus = TermCorpus::new();
        assert!(corpus.idf("anything").is_none());
    }

    #[test]
    fn test_idf_values() {
        let mut corpus = TermCorpus::new();
        corpus.add_document(&terms(&["common", "rare"]));
        corpus.add_document(&terms(&["common"]));

        // term in every document: ln(2/2) = 0
        assert_eq!(corpus.idf("common"), Some(0.0));
        // term in one of two: ln(2/1)
        assert_eq!(corpus.idf("rare"), Some(2.0f64.ln()));
        // unseen term clamps the denominator to 1
        assert_eq!(corpus.idf("unseen"), Some(2.0f64.ln()));
    }

    #[test]
    fn test_idf_monotonically_non_increasing() {
        let mut corpus = TermCorpus::new();
        corpus.add_document(&terms(&["fox", "quick"]));
        corpus.add_document(&terms(&["cat"]));
        let idf_before = corpus.idf("fox").unwrap();

        corpus.add_document(&terms(&["fox"]));
        corpus.add_document(&terms(&["fox", "dog"]));
        let idf_after = corpus.idf("fox").unwrap();

        assert!(idf_after <= idf_before);
    }

    #[test]
    fn test_reset() {
        let mut corpus = TermCorpus::new();
        corpus.add_document(&terms(&["fox"]));
        corpus.reset();

        assert_eq!(corpus.num_docs(), 0);
        assert_eq!(corpus.num_terms(), 0);
        assert_eq!(corpus.count("fox"), 0);
        assert!(corpus.idf("fox").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut corpus = TermCorpus::new();
        corpus.add_document(&terms(&["fox", "quick"]));

        let json = serde_json::to_string(&corpus).unwrap();
        let restored: TermCorpus = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.num_docs(), 1);
        assert_eq!(restored.count("fox"), 1);
    }
}
