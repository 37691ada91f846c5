//! Matching candidates against gold keyphrases for classifier training.

use ahash::AHashSet;

use crate::candidate::Candidate;

/// Re-order a phrase's tokens alphabetically, e.g. `the quick brown fox`
/// becomes `brown fox quick the`. Word order in manually assigned
/// keyphrases is inconsistent, so matching on the canonical form raises
/// recall.
pub fn canonicalize(phrase: &str) -> String {
    let mut words: Vec<&str> = phrase.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

/// The matchable variants of one training document's gold keyphrase set.
///
/// Each gold keyphrase contributes its lowercased literal form, its stemmed
/// form, and the canonicalized (alphabetically re-ordered) version of both.
/// A candidate counts as a keyword if any of its own variants (stemmed
/// value or surface form, literal or canonicalized) matches.
#[derive(Clone, Debug, Default)]
pub struct GoldVariants {
    variants: AHashSet<String>,
}

impl GoldVariants {
    /// Build the variant set from gold keyphrases and their stemmed forms.
    ///
    /// `stemmed` must be produced by the same stemmer as candidate values;
    /// the caller pairs each gold keyphrase with its stemmed rendition.
    pub fn new<'a, I>(gold_and_stemmed: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut variants = AHashSet::new();
        for (gold, stemmed) in gold_and_stemmed {
            let literal = gold.to_lowercase().trim().to_string();
            variants.insert(canonicalize(&literal));
            variants.insert(literal);
            let stemmed = stemmed.to_lowercase().trim().to_string();
            variants.insert(canonicalize(&stemmed));
            variants.insert(stemmed);
        }
        GoldVariants { variants }
    }

    /// Check whether a candidate matches any gold variant.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        let value = candidate.value.to_lowercase();
        let unstem = candidate.unstem.to_lowercase();
        self.variants.contains(&value)
            || self.variants.contains(&unstem)
            || self.variants.contains(&canonicalize(&value))
            || self.variants.contains(&canonicalize(&unstem))
    }

    /// Mark every matching candidate's keyword label; returns how many were
    /// marked.
    pub fn mark(&self, candidates: &mut [Candidate]) -> usize {
        let mut marked = 0;
        for candidate in candidates {
            candidate.is_keyword = self.matches(candidate);
            if candidate.is_keyword {
                marked += 1;
            }
        }
        marked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateFeatures;

    fn candidate(value: &str, unstem: &str) -> Candidate {
        Candidate {
            value: value.to_string(),
            unstem: unstem.to_string(),
            occurrences: 1,
            first_offset: 0,
            last_offset: 0,
            features: CandidateFeatures::default(),
            is_keyword: false,
        }
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("the quick brown fox"), "brown fox quick the");
        assert_eq!(canonicalize("single"), "single");
    }

    #[test]
    fn test_matches_stemmed_value() {
        let variants = GoldVariants::new([("Information Retrieval", "inform retriev")]);

        assert!(variants.matches(&candidate("inform retriev", "information retrieval")));
        assert!(variants.matches(&candidate("other stem", "Information Retrieval")));
        assert!(!variants.matches(&candidate("unrelated", "unrelated")));
    }

    #[test]
    fn test_matches_reordered_words() {
        let variants = GoldVariants::new([("retrieval information", "retriev inform")]);

        // canonical forms line up even though word order differs
        assert!(variants.matches(&candidate("inform retriev", "information retrieval")));
    }

    #[test]
    fn test_mark_counts() {
        let variants = GoldVariants::new([("quick fox", "quick fox")]);
        let mut candidates = vec![
            candidate("quick fox", "quick fox"),
            candidate("slow dog", "slow dog"),
        ];

        let marked = variants.mark(&mut candidates);
        assert_eq!(marked, 1);
        assert!(candidates[0].is_keyword);
        assert!(!candidates[1].is_keyword);
    }
}
