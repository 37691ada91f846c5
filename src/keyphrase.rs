//! The output unit of extraction: a weighted keyphrase.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A keyphrase value with its relevance weight.
///
/// The value is immutable after creation; the weight is adjusted by the
/// reranking stages. Results are ordered by descending weight, with ties
/// resolved by insertion order (stable sort), so extraction output is
/// deterministic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyphrase {
    value: String,
    weight: f64,
}

impl Keyphrase {
    /// Create a new keyphrase.
    pub fn new<S: Into<String>>(value: S, weight: f64) -> Self {
        Keyphrase {
            value: value.into(),
            weight,
        }
    }

    /// The keyphrase text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The current relevance weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replace the relevance weight (used by the reranking stages).
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Add to the relevance weight (used by the reranking stages).
    pub fn add_weight(&mut self, delta: f64) {
        self.weight += delta;
    }
}

impl fmt::Display for Keyphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.weight)
    }
}

/// Stable descending sort by weight followed by truncation to `k` entries.
///
/// Returns fewer than `k` keyphrases when fewer candidates exist; never
/// errors, never pads.
pub fn select_top_k(mut keyphrases: Vec<Keyphrase>, k: usize) -> Vec<Keyphrase> {
    keyphrases.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    keyphrases.truncate(k);
    keyphrases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_top_k_orders_and_truncates() {
        let keyphrases = vec![
            Keyphrase::new("low", 0.1),
            Keyphrase::new("high", 0.9),
            Keyphrase::new("mid", 0.5),
        ];

        let top = select_top_k(keyphrases, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].value(), "high");
        assert_eq!(top[1].value(), "mid");
    }

    #[test]
    fn test_select_top_k_returns_all_when_short() {
        let keyphrases = vec![Keyphrase::new("only", 1.0)];
        let top = select_top_k(keyphrases, 10);
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let keyphrases = vec![
            Keyphrase::new("first", 0.5),
            Keyphrase::new("second", 0.5),
            Keyphrase::new("third", 0.5),
        ];

        let top = select_top_k(keyphrases, 3);
        let values: Vec<&str> = top.iter().map(|k| k.value()).collect();
        assert_eq!(values, vec!["first", "second", "third"]);
    }
}
