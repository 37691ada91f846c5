//! Corpus statistics accumulated during training.
//!
//! Two structures live here, both created once per extractor instance,
//! populated by `train`, finalized at `end_training`, and cleared by
//! `reset`:
//!
//! - [`TermCorpus`] - document-frequency counts answering IDF queries.
//! - [`CooccurrenceMatrix`] - symmetric pair statistics over gold keyphrase
//!   sets, answering conditional-probability and nearest-neighbor queries.
//!
//! Both are mutated only on the training path and are read-only during
//! extraction, which is what makes parallel batch extraction safe once
//! training is finalized.
//!
//! [`TermCorpus`]: term_corpus::TermCorpus
//! [`CooccurrenceMatrix`]: cooccurrence::CooccurrenceMatrix

pub mod cooccurrence;
pub mod term_corpus;

pub use cooccurrence::CooccurrenceMatrix;
pub use term_corpus::TermCorpus;
