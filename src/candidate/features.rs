//! Candidate records and metric computation.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::corpus::TermCorpus;

/// Per-candidate metrics consumed by the scorers.
///
/// All positional metrics are normalized into `[0, 1]` by the document's
/// byte length; `frequency` is normalized by the document's surviving token
/// count. `idf` and `tf_idf` stay at 0 until
/// [`annotate_idf`] runs, `prior` stays at 0 until [`annotate_priors`] runs
/// (both are extraction/finalization stages).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateFeatures {
    /// Occurrence count normalized by the document token count.
    pub frequency: f64,
    /// Normalized position (0-1) of the first occurrence.
    pub first: f64,
    /// Normalized distance between first and last occurrence; 0 for a
    /// single occurrence.
    pub spread: f64,
    /// Inverse document frequency from the term corpus.
    pub idf: f64,
    /// `frequency * idf`.
    pub tf_idf: f64,
    /// Keyphrase-corpus prior ("keyphraseness").
    pub prior: f64,
    /// Number of whitespace-separated words in the candidate value.
    pub term_count: f64,
}

impl CandidateFeatures {
    /// The cleaned numeric feature vector fed to classifiers. Training-only
    /// data (the keyword label) and the surface form never appear here.
    pub fn to_vector(self) -> Vec<f64> {
        vec![
            self.frequency,
            self.first,
            self.spread,
            self.idf,
            self.tf_idf,
            self.prior,
            self.term_count,
        ]
    }
}

/// One deduplicated candidate: a distinct value with aggregated metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Normalized (stemmed, lowercased) candidate value.
    pub value: String,
    /// Surface form of the first occurrence, for literal gold matching.
    pub unstem: String,
    /// Raw occurrence count within the document.
    pub occurrences: u64,
    /// Byte offset of the first occurrence.
    pub first_offset: usize,
    /// Byte offset of the last occurrence.
    pub last_offset: usize,
    /// Computed metrics.
    pub features: CandidateFeatures,
    /// Training-only keyword label; never part of the feature vector.
    pub is_keyword: bool,
}

/// Collapse per-occurrence tokens into one candidate per distinct value.
///
/// Candidates keep the order of their first occurrence, which is what makes
/// downstream ranking deterministic: stable sorting preserves this order for
/// equal weights. `text_len` is the document's byte length and `token_count`
/// the number of surviving single tokens (before n-gram expansion); both
/// normalize the metrics.
pub fn aggregate(tokens: &[Token], text_len: usize, token_count: usize) -> Vec<Candidate> {
    let mut order: Vec<String> = Vec::new();
    let mut by_value: AHashMap<String, Candidate> = AHashMap::new();

    for token in tokens {
        if let Some(existing) = by_value.get_mut(&token.text) {
            existing.occurrences += 1;
            existing.first_offset = existing.first_offset.min(token.start_offset);
            existing.last_offset = existing.last_offset.max(token.start_offset);
        } else {
            order.push(token.text.clone());
            by_value.insert(
                token.text.clone(),
                Candidate {
                    value: token.text.clone(),
                    unstem: token.unstemmed().to_string(),
                    occurrences: 1,
                    first_offset: token.start_offset,
                    last_offset: token.start_offset,
                    features: CandidateFeatures::default(),
                    is_keyword: false,
                },
            );
        }
    }

    let text_len = text_len.max(1) as f64;
    let token_count = token_count.max(1) as f64;

    let mut result = Vec::with_capacity(order.len());
    for value in order {
        if let Some(mut candidate) = by_value.remove(&value) {
            candidate.features.frequency = candidate.occurrences as f64 / token_count;
            candidate.features.first = candidate.first_offset as f64 / text_len;
            candidate.features.spread =
                (candidate.last_offset - candidate.first_offset) as f64 / text_len;
            candidate.features.term_count = candidate.value.split(' ').count() as f64;
            result.push(candidate);
        }
    }
    result
}

/// Extraction-time IDF and TF-IDF annotation.
///
/// Unseen terms and the untrained corpus both degrade to an IDF of 0 so the
/// hot path stays exception-free; the untrained case simply produces
/// all-zero weights downstream.
pub fn annotate_idf(candidates: &mut [Candidate], corpus: &TermCorpus) {
    for candidate in candidates {
        let idf = corpus.idf(&candidate.value).unwrap_or(0.0);
        candidate.features.idf = idf;
        candidate.features.tf_idf = candidate.features.frequency * idf;
    }
}

/// Keyphrase-corpus prior annotation ("keyphraseness"):
/// `(count(value) + 1) / num_terms`, with the denominator clamped to 1 so an
/// empty prior corpus yields a uniform prior of 1.
pub fn annotate_priors(candidates: &mut [Candidate], keyphrase_corpus: &TermCorpus) {
    let denom = keyphrase_corpus.num_terms().max(1) as f64;
    for candidate in candidates {
        candidate.features.prior = (keyphrase_corpus.count(&candidate.value) + 1) as f64 / denom;
    }
}
