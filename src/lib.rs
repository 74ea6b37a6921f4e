//! Motif prevalence scoring over tagged book corpora.
//!
//! Given a word-by-word tagged corpus (one record per occurrence, with
//! lemma and morph code), a stopword list, optional multi-word token
//! definitions, and a set of motif terms, this crate produces one
//! comparable score per book: how strongly that book exhibits the
//! motif. Raw counts are normalized so rare-but-significant terms
//! weigh more than common ones.
//!
//! The pipeline runs in one bounded pass:
//!
//! 1. [`count_corpus`] streams every book through the stopword filter
//!    and the sliding [`WindowMatcher`], folding multi-word tokens into
//!    single synthetic counts.
//! 2. [`FrequencyModel::build`] derives book-local augmented
//!    frequencies and one corpus-wide weight per lexeme.
//! 3. [`score_books`] combines both over the query terms.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod matcher;
pub mod types;

pub use corpus::{CorpusSource, MemoryCorpus, TaggedCorpus, BOOKS};
pub use engine::{
    count_corpus, run_pipeline, score_books, verify_terms, BookScore, CorpusFrequencies,
    FreqTable, FrequencyAccumulator, FrequencyModel,
};
pub use matcher::{
    LemmaPattern, MatchPolicy, TermMatcher, TokenAlternative, TokenDefinition, TokenMatch,
    WindowMatcher,
};
pub use types::{MotifError, MotifResult, WordOccurrence, MORPH_CASE_POS};
