//! Cooccurrence-based reranking and keyphrase synthesis.
//!
//! Both stages only consider the top `ceil(sqrt(n))` keyphrases by weight.
//! Documents produce candidate lists of wildly different sizes, and the
//! square root keeps the pair work subquadratic while still covering the
//! head of the ranking where reinforcement matters.

use ahash::{AHashMap, AHashSet};

use crate::corpus::CooccurrenceMatrix;
use crate::keyphrase::Keyphrase;

/// Minimum relative correlation for a synthesized neighbor.
pub const MIN_SYNTHESIS_ASSOCIATION: f64 = 0.01;

/// Minimum raw joint count for a synthesized neighbor.
pub const MIN_SYNTHESIS_JOINT_COUNT: u64 = 2;

/// Neighbors considered per synthesis seed.
const NEIGHBORS_PER_SEED: usize = 5;

fn head_len(n: usize) -> usize {
    (n as f64).sqrt().ceil() as usize
}

fn sort_descending(keyphrases: &mut [Keyphrase]) {
    keyphrases.sort_by(|a, b| {
        b.weight()
            .partial_cmp(&a.weight())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Mutually reinforce keyphrases that were assigned together in training.
///
/// For each ordered pair `(k1, k2)` within the head of the ranking, `k1`
/// gains `weight(k2) * P(value(k1) | value(k2))`, where the conditional is
/// the Laplace-smoothed estimate from the training matrix. Weight reads use
/// a snapshot taken before the pass, so the outcome does not depend on
/// iteration order.
pub fn rerank_cooccurrences(keyphrases: &mut Vec<Keyphrase>, matrix: &CooccurrenceMatrix) {
    sort_descending(keyphrases);
    let head = head_len(keyphrases.len()).min(keyphrases.len());
    if head < 2 {
        return;
    }

    let snapshot: Vec<(String, f64)> = keyphrases[..head]
        .iter()
        .map(|k| (k.value().to_string(), k.weight()))
        .collect();

    for (i, keyphrase) in keyphrases[..head].iter_mut().enumerate() {
        let mut gain = 0.0;
        for (j, (other_value, other_weight)) in snapshot.iter().enumerate() {
            if i == j {
                continue;
            }
            gain += other_weight
                * matrix.conditional_probability_laplace(other_value, snapshot[i].0.as_str());
        }
        keyphrase.add_weight(gain);
    }
}

/// Append keyphrases that never occur in the document but are strongly
/// associated with the extracted ones.
///
/// Each head keyphrase seeds up to five of its most correlated training
/// neighbors. A neighbor is admitted when its relative correlation reaches
/// [`MIN_SYNTHESIS_ASSOCIATION`] and its raw joint count reaches
/// [`MIN_SYNTHESIS_JOINT_COUNT`]; weak or one-off pairings synthesize
/// nothing. A synthesized keyphrase seeded by several extracted ones
/// accumulates `weight(seed) * correlation` from each. Values already in
/// the result list are never duplicated.
pub fn synthesize(keyphrases: &mut Vec<Keyphrase>, matrix: &CooccurrenceMatrix) {
    sort_descending(keyphrases);
    let head = head_len(keyphrases.len()).min(keyphrases.len());
    if head == 0 {
        return;
    }

    let existing: AHashSet<String> = keyphrases
        .iter()
        .map(|k| k.value().to_string())
        .collect();

    let mut order: Vec<String> = Vec::new();
    let mut synthesized: AHashMap<String, f64> = AHashMap::new();

    for seed in &keyphrases[..head] {
        for (neighbor, association) in matrix.highest(seed.value(), NEIGHBORS_PER_SEED) {
            if existing.contains(&neighbor) {
                continue;
            }
            if association < MIN_SYNTHESIS_ASSOCIATION
                || matrix.count(seed.value(), &neighbor) < MIN_SYNTHESIS_JOINT_COUNT
            {
                continue;
            }
            let entry = synthesized.entry(neighbor.clone()).or_insert_with(|| {
                order.push(neighbor.clone());
                0.0
            });
            *entry += seed.weight() * association;
        }
    }

    for value in order {
        if let Some(weight) = synthesized.remove(&value) {
            keyphrases.push(Keyphrase::new(value, weight));
        }
    }
}
