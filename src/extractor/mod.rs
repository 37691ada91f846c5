//! The trainable keyphrase extractor: the crate's top-level entry point.
//!
//! The extractor has a two-phase lifecycle. During training, each call to
//! [`KeyphraseExtractor::train`] feeds one document with its manually
//! assigned gold keyphrases; the extractor accumulates document-frequency,
//! keyphrase-prior and cooccurrence statistics and buffers labeled
//! candidates. [`KeyphraseExtractor::end_training`] finalizes the model
//! (freezes the cooccurrence matrix and, in classifier mode, fits the
//! classifier over all buffered candidates). After that,
//! [`KeyphraseExtractor::extract`] is a read-only operation and
//! [`KeyphraseExtractor::extract_batch`] runs it over many documents in
//! parallel.

mod rerank;

pub use rerank::{
    MIN_SYNTHESIS_ASSOCIATION, MIN_SYNTHESIS_JOINT_COUNT, rerank_cooccurrences, synthesize,
};

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ahash::AHashSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, CandidateAnalyzer, CandidateAnalyzerOptions};
use crate::analysis::token::Token;
use crate::candidate::{
    Candidate, GoldVariants, aggregate, annotate_idf, annotate_priors,
};
use crate::corpus::{CooccurrenceMatrix, TermCorpus};
use crate::error::{QuillonError, Result};
use crate::keyphrase::{Keyphrase, select_top_k};
use crate::scorer::{
    Classifier, ClassifierScorer, DEFAULT_FIRST_CUTOFF, DEFAULT_SPREAD_CUTOFF, FormulaScorer,
    GaussianNb, Scorer, TrainingInstance,
};

/// How candidates are turned into weighted keyphrases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringStrategy {
    /// Closed-form ranking formula; works without labeled training data
    /// beyond the corpus statistics.
    #[default]
    Formula,
    /// Trained binary classifier; requires `train` + `end_training` before
    /// extraction.
    Classifier,
}

/// Configuration for a [`KeyphraseExtractor`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum number of keyphrases returned per document.
    pub keyphrase_count: usize,
    /// Maximum candidate n-gram size in words.
    pub max_ngram_size: usize,
    /// Minimum single-token length in characters.
    pub min_token_length: usize,
    /// Custom stop word set; `None` uses the default English list.
    pub stop_words: Option<HashSet<String>>,
    /// Scoring strategy.
    pub scoring: ScoringStrategy,
    /// Whether cooccurring keyphrases reinforce each other after scoring.
    pub rerank_cooccurrences: bool,
    /// Whether strongly associated keyphrases absent from the document are
    /// synthesized.
    pub synthesize: bool,
    /// Formula scoring: first-occurrence cutoff past which candidates are
    /// zeroed.
    pub first_cutoff: f64,
    /// Formula scoring: spread cutoff at which candidates are zeroed.
    pub spread_cutoff: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            keyphrase_count: 10,
            max_ngram_size: 3,
            min_token_length: 4,
            stop_words: None,
            scoring: ScoringStrategy::Formula,
            rerank_cooccurrences: true,
            synthesize: true,
            first_cutoff: DEFAULT_FIRST_CUTOFF,
            spread_cutoff: DEFAULT_SPREAD_CUTOFF,
        }
    }
}

/// One buffered training document: labeled candidates plus the unique term
/// set, kept until `end_training` can annotate corpus-dependent features.
#[derive(Clone, Debug)]
struct TrainingDocument {
    candidates: Vec<Candidate>,
}

/// Everything a trained extractor needs to run, in serializable form.
#[derive(Serialize, Deserialize)]
struct ModelSnapshot {
    config: ExtractorConfig,
    term_corpus: TermCorpus,
    keyphrase_corpus: TermCorpus,
    cooccurrences: CooccurrenceMatrix,
    classifier: GaussianNb,
    trained: bool,
}

/// A trainable keyphrase extractor.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use quillon::extractor::{ExtractorConfig, KeyphraseExtractor};
///
/// let mut extractor = KeyphraseExtractor::new(ExtractorConfig::default()).unwrap();
///
/// let gold: HashSet<String> = ["search engine".to_string()].into();
/// extractor
///     .train("search engines index the web for fast lookups", &gold)
///     .unwrap();
/// extractor.end_training().unwrap();
///
/// let keyphrases = extractor
///     .extract("building a search engine requires an inverted index")
///     .unwrap();
/// assert!(keyphrases.len() <= extractor.keyphrase_count());
/// ```
pub struct KeyphraseExtractor {
    config: ExtractorConfig,
    analyzer: CandidateAnalyzer,
    formula: FormulaScorer,
    term_corpus: TermCorpus,
    keyphrase_corpus: TermCorpus,
    cooccurrences: CooccurrenceMatrix,
    classifier: GaussianNb,
    training_docs: Vec<TrainingDocument>,
}

impl KeyphraseExtractor {
    /// Create a new, untrained extractor.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let analyzer = CandidateAnalyzer::new(CandidateAnalyzerOptions {
            min_token_length: config.min_token_length,
            max_ngram_size: config.max_ngram_size,
            stop_words: config.stop_words.clone(),
        })?;
        let formula = FormulaScorer::with_cutoffs(config.first_cutoff, config.spread_cutoff);

        Ok(KeyphraseExtractor {
            config,
            analyzer,
            formula,
            term_corpus: TermCorpus::new(),
            keyphrase_corpus: TermCorpus::new(),
            cooccurrences: CooccurrenceMatrix::new(),
            classifier: GaussianNb::new(),
            training_docs: Vec::new(),
        })
    }

    /// Maximum number of keyphrases returned per document.
    pub fn keyphrase_count(&self) -> usize {
        self.config.keyphrase_count
    }

    /// Change the number of keyphrases returned per document. Takes effect
    /// on the next extraction; no retraining needed.
    pub fn set_keyphrase_count(&mut self, count: usize) {
        self.config.keyphrase_count = count;
    }

    /// Feed one training document with its gold keyphrase set.
    ///
    /// Updates the term corpus, the keyphrase prior corpus and the
    /// cooccurrence matrix, and buffers the document's labeled candidates
    /// for [`end_training`](Self::end_training).
    pub fn train(&mut self, text: &str, gold_keyphrases: &HashSet<String>) -> Result<()> {
        let mut candidates = self.candidates(text)?;

        let terms: AHashSet<String> = candidates.iter().map(|c| c.value.clone()).collect();
        self.term_corpus.add_document(&terms);

        // gold keyphrases enter corpus space through the same stemmer
        let stemmed: Vec<(String, String)> = gold_keyphrases
            .iter()
            .map(|gold| (gold.clone(), self.analyzer.stem_phrase(gold)))
            .collect();
        let stemmed_set: AHashSet<String> =
            stemmed.iter().map(|(_, s)| s.clone()).collect();
        self.keyphrase_corpus.add_document(&stemmed_set);
        self.cooccurrences.add_all(&stemmed_set);

        let variants =
            GoldVariants::new(stemmed.iter().map(|(g, s)| (g.as_str(), s.as_str())));
        let marked = variants.mark(&mut candidates);
        log::debug!(
            "trained on document: {} candidates, {} marked as keywords",
            candidates.len(),
            marked
        );

        self.training_docs.push(TrainingDocument { candidates });
        Ok(())
    }

    /// Finalize training.
    ///
    /// Freezes the cooccurrence matrix and, in classifier mode, annotates
    /// the buffered candidates with the now-complete corpus statistics and
    /// fits the classifier. Must be called before extraction in classifier
    /// mode; in formula mode it is optional but fixes the smoothing
    /// vocabulary of the reranker.
    pub fn end_training(&mut self) -> Result<()> {
        self.cooccurrences.make_relative_scores();

        if self.config.scoring == ScoringStrategy::Classifier {
            let mut instances = Vec::new();
            for doc in &mut self.training_docs {
                annotate_idf(&mut doc.candidates, &self.term_corpus);
                annotate_priors(&mut doc.candidates, &self.keyphrase_corpus);
                for candidate in &doc.candidates {
                    instances.push(TrainingInstance {
                        features: candidate.features.to_vector(),
                        is_keyword: candidate.is_keyword,
                    });
                }
            }
            if instances.is_empty() {
                return Err(QuillonError::classifier_unavailable(
                    "no training documents were provided before end_training",
                ));
            }
            self.classifier.fit(&instances)?;
        }

        log::info!(
            "training finalized: {} documents, {} terms, {} keyphrase terms, {} cooccurrence terms",
            self.term_corpus.num_docs(),
            self.term_corpus.num_terms(),
            self.keyphrase_corpus.num_terms(),
            self.cooccurrences.num_terms()
        );
        self.training_docs.clear();
        Ok(())
    }

    /// Extract the top keyphrases from one document.
    ///
    /// Read-only: repeated extraction of the same document yields the same
    /// result, and extractions never influence each other.
    pub fn extract(&self, text: &str) -> Result<Vec<Keyphrase>> {
        let mut candidates = self.candidates(text)?;
        annotate_idf(&mut candidates, &self.term_corpus);
        annotate_priors(&mut candidates, &self.keyphrase_corpus);

        let mut keyphrases = match self.config.scoring {
            ScoringStrategy::Formula => self.formula.score(&candidates)?,
            ScoringStrategy::Classifier => {
                ClassifierScorer::new(&self.classifier).score(&candidates)?
            }
        };

        if self.config.rerank_cooccurrences {
            rerank_cooccurrences(&mut keyphrases, &self.cooccurrences);
        }
        if self.config.synthesize {
            synthesize(&mut keyphrases, &self.cooccurrences);
        }

        Ok(select_top_k(keyphrases, self.config.keyphrase_count))
    }

    /// Extract keyphrases from many documents in parallel.
    ///
    /// Results come back in input order. The first failing document aborts
    /// the batch.
    pub fn extract_batch(&self, texts: &[&str]) -> Result<Vec<Vec<Keyphrase>>> {
        texts.par_iter().map(|text| self.extract(text)).collect()
    }

    /// Drop all learned state, returning the extractor to its freshly
    /// constructed configuration.
    pub fn reset(&mut self) {
        self.term_corpus.reset();
        self.keyphrase_corpus.reset();
        self.cooccurrences.reset();
        self.classifier = GaussianNb::new();
        self.training_docs.clear();
    }

    /// Persist the trained model as JSON.
    pub fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let snapshot = ModelSnapshot {
            config: self.config.clone(),
            term_corpus: self.term_corpus.clone(),
            keyphrase_corpus: self.keyphrase_corpus.clone(),
            cooccurrences: self.cooccurrences.clone(),
            classifier: self.classifier.clone(),
            trained: self.cooccurrences.is_frozen(),
        };
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(writer, &snapshot)?;
        Ok(())
    }

    /// Load a model persisted by [`save_model`](Self::save_model).
    ///
    /// The analysis pipeline is rebuilt from the saved configuration, so a
    /// loaded extractor produces the same candidates as the one that was
    /// saved.
    pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let snapshot: ModelSnapshot = serde_json::from_reader(reader)?;

        let mut extractor = KeyphraseExtractor::new(snapshot.config)?;
        extractor.term_corpus = snapshot.term_corpus;
        extractor.keyphrase_corpus = snapshot.keyphrase_corpus;
        extractor.cooccurrences = snapshot.cooccurrences;
        extractor.classifier = snapshot.classifier;
        Ok(extractor)
    }

    /// Run the analysis pipeline and aggregate the document's candidates.
    fn candidates(&self, text: &str) -> Result<Vec<Candidate>> {
        if text.trim().is_empty() {
            return Err(QuillonError::document_unprocessable(
                "document contains no processable text",
            ));
        }

        let tokens: Vec<Token> = self.analyzer.analyze(text)?.collect();
        // frequency normalizes by single tokens, not n-gram expansions
        let token_count = tokens.iter().filter(|t| !t.text.contains(' ')).count();
        Ok(aggregate(&tokens, text.len(), token_count))
    }
}

impl std::fmt::Debug for KeyphraseExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyphraseExtractor")
            .field("config", &self.config)
            .field("trained_docs", &self.term_corpus.num_docs())
            .field("classifier_trained", &self.classifier.is_trained())
            .finish()
    }
}
