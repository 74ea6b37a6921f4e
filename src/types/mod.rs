//! Crate-wide error and result types, plus the word-occurrence record.

use thiserror::Error;

pub mod occurrence;

pub use occurrence::{WordOccurrence, MORPH_CASE_POS};

/// Crate-wide result alias.
pub type MotifResult<T> = Result<T, MotifError>;

/// Errors surfaced by corpus loading, configuration parsing, and the
/// scoring pipeline.
///
/// Every failure here is a configuration or data problem; the pipeline
/// is deterministic over its inputs, so nothing is retried.
#[derive(Debug, Error)]
pub enum MotifError {
    /// A stopword, token-definition, or motif-term file line could not
    /// be parsed.
    #[error("{path}:{line}: {message}")]
    ConfigFormat {
        /// Display label of the offending file.
        path: String,
        /// 1-based line number.
        line: usize,
        message: String,
    },

    /// A corpus file line could not be parsed.
    #[error("corpus line {line}: {message}")]
    CorpusFormat {
        /// 1-based line number; 0 when the whole file is unreadable.
        line: usize,
        message: String,
    },

    /// The motif term list was empty after comment stripping.
    #[error("motif term list is empty")]
    EmptyTermSet,

    /// Query terms that never appear in the aggregate frequency table.
    #[error("terms not found in corpus: {}", .terms.join(", "))]
    UnknownTerm {
        /// Every missing term, in query order.
        terms: Vec<String>,
    },

    /// A book contributed no positively counted lemma, leaving its
    /// frequency maximum undefined.
    #[error("book {book} has no countable lemmas")]
    EmptyBook {
        /// 1-based book index.
        book: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
