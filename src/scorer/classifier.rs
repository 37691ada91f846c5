//! Classifier-based scorer and the default naive Bayes implementation.

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::{QuillonError, Result};
use crate::keyphrase::Keyphrase;
use crate::scorer::Scorer;

/// One labeled candidate accumulated during training.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingInstance {
    /// Cleaned numeric feature vector (no label, no surface form).
    pub features: Vec<f64>,
    /// Whether the candidate matched a gold keyphrase.
    pub is_keyword: bool,
}

/// Trait for binary classifiers over candidate feature vectors.
///
/// The classifier is a collaborator of the scorer: anything that can be fit
/// on labeled candidates and report a posterior probability for the keyword
/// class works here.
pub trait Classifier: Send + Sync {
    /// Fit the classifier on the accumulated labeled candidates.
    fn fit(&mut self, instances: &[TrainingInstance]) -> Result<()>;

    /// Posterior probability of the keyword class for one feature vector.
    fn predict_positive(&self, features: &[f64]) -> Result<f64>;

    /// Whether the classifier has been fit.
    fn is_trained(&self) -> bool;

    /// Get the name of this classifier.
    fn name(&self) -> &'static str;
}

/// Per-class statistics for one feature: mean and variance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct FeatureStats {
    mean: f64,
    variance: f64,
}

/// Gaussian naive Bayes over candidate feature vectors.
///
/// Keyword extraction training data is extremely skewed (a handful of
/// positive candidates per document against hundreds of negatives), which
/// naive Bayes tolerates well. Scoring runs in log space; a variance floor
/// keeps near-constant features from collapsing the likelihood.
///
/// # Examples
///
/// ```
/// use quillon::scorer::{Classifier, GaussianNb, TrainingInstance};
///
/// let mut nb = GaussianNb::new();
/// let instances = vec![
///     TrainingInstance { features: vec![0.9, 0.1], is_keyword: true },
///     TrainingInstance { features: vec![0.8, 0.2], is_keyword: true },
///     TrainingInstance { features: vec![0.1, 0.9], is_keyword: false },
///     TrainingInstance { features: vec![0.2, 0.8], is_keyword: false },
/// ];
/// nb.fit(&instances).unwrap();
///
/// let p = nb.predict_positive(&[0.85, 0.15]).unwrap();
/// assert!(p > 0.5);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GaussianNb {
    positive: Vec<FeatureStats>,
    negative: Vec<FeatureStats>,
    positive_prior: f64,
    trained: bool,
}

/// Variance floor preventing degenerate likelihoods for constant features.
const VARIANCE_FLOOR: f64 = 1e-9;

impl GaussianNb {
    /// Create a new, untrained classifier.
    pub fn new() -> Self {
        GaussianNb::default()
    }

    fn class_stats(instances: &[TrainingInstance], label: bool, dims: usize) -> Vec<FeatureStats> {
        let members: Vec<&TrainingInstance> =
            instances.iter().filter(|i| i.is_keyword == label).collect();
        let n = members.len().max(1) as f64;

        let mut stats = vec![FeatureStats::default(); dims];
        for instance in &members {
            for (dim, value) in instance.features.iter().enumerate() {
                stats[dim].mean += value;
            }
        }
        for stat in &mut stats {
            stat.mean /= n;
        }
        for instance in &members {
            for (dim, value) in instance.features.iter().enumerate() {
                let delta = value - stats[dim].mean;
                stats[dim].variance += delta * delta;
            }
        }
        for stat in &mut stats {
            stat.variance = (stat.variance / n).max(VARIANCE_FLOOR);
        }
        stats
    }

    fn log_likelihood(stats: &[FeatureStats], features: &[f64]) -> f64 {
        stats
            .iter()
            .zip(features)
            .map(|(stat, value)| {
                let delta = value - stat.mean;
                -0.5 * ((2.0 * std::f64::consts::PI * stat.variance).ln()
                    + delta * delta / stat.variance)
            })
            .sum()
    }
}

impl Classifier for GaussianNb {
    fn fit(&mut self, instances: &[TrainingInstance]) -> Result<()> {
        if instances.is_empty() {
            return Err(QuillonError::other(
                "cannot fit classifier on an empty training set",
            ));
        }
        let dims = instances[0].features.len();
        if instances.iter().any(|i| i.features.len() != dims) {
            return Err(QuillonError::other(
                "training instances have inconsistent feature dimensions",
            ));
        }

        let positives = instances.iter().filter(|i| i.is_keyword).count();
        // Laplace-smoothed class prior so a missing class never yields a
        // zero or one posterior.
        self.positive_prior = (positives + 1) as f64 / (instances.len() + 2) as f64;
        self.positive = Self::class_stats(instances, true, dims);
        self.negative = Self::class_stats(instances, false, dims);
        self.trained = true;
        Ok(())
    }

    fn predict_positive(&self, features: &[f64]) -> Result<f64> {
        if !self.trained {
            return Err(QuillonError::classifier_unavailable(
                "classifier has not been fit",
            ));
        }
        if features.len() != self.positive.len() {
            return Err(QuillonError::missing_feature(format!(
                "expected {} features, got {}",
                self.positive.len(),
                features.len()
            )));
        }

        let log_pos = self.positive_prior.ln() + Self::log_likelihood(&self.positive, features);
        let log_neg =
            (1.0 - self.positive_prior).ln() + Self::log_likelihood(&self.negative, features);

        // posterior = 1 / (1 + exp(log_neg - log_pos)), computed stably
        let diff = log_neg - log_pos;
        let posterior = if diff > 700.0 {
            0.0
        } else if diff < -700.0 {
            1.0
        } else {
            1.0 / (1.0 + diff.exp())
        };
        Ok(posterior)
    }

    fn is_trained(&self) -> bool {
        self.trained
    }

    fn name(&self) -> &'static str {
        "gaussian_nb"
    }
}

/// Scorer backed by a trained binary classifier.
///
/// Each candidate's cleaned feature vector is fed to the classifier; its
/// keyword-class posterior becomes the weight. Candidates the classifier
/// rejects (posterior below the acceptance threshold) are dropped entirely
/// rather than low-weighted.
pub struct ClassifierScorer<'a> {
    classifier: &'a dyn Classifier,
    threshold: f64,
}

impl<'a> ClassifierScorer<'a> {
    /// Create a scorer over a trained classifier with the default 0.5
    /// acceptance threshold.
    pub fn new(classifier: &'a dyn Classifier) -> Self {
        ClassifierScorer {
            classifier,
            threshold: 0.5,
        }
    }

    /// Override the acceptance threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl Scorer for ClassifierScorer<'_> {
    fn score(&self, candidates: &[Candidate]) -> Result<Vec<Keyphrase>> {
        if !self.classifier.is_trained() {
            return Err(QuillonError::classifier_unavailable(
                "extraction attempted before the classifier was fit",
            ));
        }

        let mut keyphrases = Vec::new();
        for candidate in candidates {
            let posterior = self
                .classifier
                .predict_positive(&candidate.features.to_vector())?;
            if posterior >= self.threshold {
                keyphrases.push(Keyphrase::new(candidate.value.clone(), posterior));
            }
        }
        Ok(keyphrases)
    }

    fn name(&self) -> &'static str {
        "classifier"
    }
}
