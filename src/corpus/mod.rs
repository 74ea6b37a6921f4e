//! Corpus sources: the book table and per-book word-occurrence streams.

use crate::types::{MotifResult, WordOccurrence};

pub mod tagged;

pub use tagged::TaggedCorpus;

/// Book name table for the default corpus: the aggregate pseudo-book
/// first, then the 27 New Testament books in canonical order.
pub const BOOKS: &[&str] = &[
    "All", "Mat", "Mar", "Luk", "Joh", "Act", "Rom", "1Co", "2Co", "Gal", "Eph", "Php", "Col",
    "1Th", "2Th", "1Ti", "2Ti", "Tit", "Phm", "Heb", "Jam", "1Pe", "2Pe", "1Jo", "2Jo", "3Jo",
    "Jde", "Rev",
];

/// A finite, ordered source of word occurrences, one sequence per book.
///
/// Book indices are 1-based; index 0 is reserved for the corpus-wide
/// aggregate and never addresses a book. Each book's sequence is
/// produced in document order and may be requested once per run.
pub trait CorpusSource {
    /// Number of books (aggregate excluded).
    fn book_count(&self) -> usize;

    /// Abbreviated display name for a 1-based book index.
    fn book_abbrev(&self, book: usize) -> &str;

    /// The occurrences of a 1-based book, in document order.
    fn occurrences(&self, book: usize) -> MotifResult<Vec<WordOccurrence>>;
}

/// In-memory corpus, used by tests and benches.
#[derive(Debug, Default)]
pub struct MemoryCorpus {
    abbrevs: Vec<String>,
    books: Vec<Vec<WordOccurrence>>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book and return its 1-based index. The `book` field of
    /// each stored occurrence is rewritten to match.
    pub fn push_book(&mut self, abbrev: &str, mut occurrences: Vec<WordOccurrence>) -> usize {
        let book = self.books.len() + 1;
        for occurrence in &mut occurrences {
            occurrence.book = book;
        }
        self.abbrevs.push(abbrev.to_string());
        self.books.push(occurrences);
        book
    }
}

impl CorpusSource for MemoryCorpus {
    fn book_count(&self) -> usize {
        self.books.len()
    }

    fn book_abbrev(&self, book: usize) -> &str {
        &self.abbrevs[book - 1]
    }

    fn occurrences(&self, book: usize) -> MotifResult<Vec<WordOccurrence>> {
        Ok(self
            .books
            .get(book.wrapping_sub(1))
            .cloned()
            .unwrap_or_default())
    }
}
