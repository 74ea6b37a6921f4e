//! One-pass frequency accumulation with stopword filtering and token
//! substitution.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::matcher::WindowMatcher;
use crate::types::WordOccurrence;

/// Signed frequency table keyed by lemma or token name.
///
/// Counts are signed because token absorption decrements constituents
/// and overlapping matches can take a constituent below zero. Keys are
/// kept once created, so presence in the aggregate table records "seen
/// in the corpus" even after full absorption.
#[derive(Debug, Clone, Default)]
pub struct FreqTable {
    counts: HashMap<String, i64>,
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The count for a key; 0 when the key was never touched.
    pub fn get(&self, key: &str) -> i64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Whether the key was ever counted (even if since absorbed to 0).
    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    pub fn increment(&mut self, key: &str) {
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn decrement(&mut self, key: &str) {
        *self.counts.entry(key.to_string()).or_insert(0) -= 1;
    }

    /// All entries, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.counts.iter().map(|(key, &count)| (key.as_str(), count))
    }

    /// Entries with a nonzero count, in arbitrary order.
    pub fn non_zero(&self) -> impl Iterator<Item = (&str, i64)> {
        self.iter().filter(|&(_, count)| count != 0)
    }

    /// The largest count over all entries.
    pub fn max_count(&self) -> Option<i64> {
        self.counts.values().copied().max()
    }

    /// Number of keys (including fully absorbed ones).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Finished counting pass: one aggregate table plus one table per book.
///
/// Invariant: for every key, the aggregate count equals the sum of the
/// per-book counts — token absorption updates both levels atomically.
#[derive(Debug, Clone)]
pub struct CorpusFrequencies {
    aggregate: FreqTable,
    books: Vec<FreqTable>,
}

impl CorpusFrequencies {
    /// The corpus-wide table.
    pub fn aggregate(&self) -> &FreqTable {
        &self.aggregate
    }

    /// Per-book tables, index 0 holding book 1.
    pub fn books(&self) -> &[FreqTable] {
        &self.books
    }

    /// The table of a 1-based book index.
    pub fn book(&self, book: usize) -> Option<&FreqTable> {
        self.books.get(book.wrapping_sub(1))
    }
}

/// Streams each book's occurrences through the stopword filter, the
/// count tables, and the window matcher.
pub struct FrequencyAccumulator {
    stopwords: HashSet<String>,
    matcher: WindowMatcher,
    aggregate: FreqTable,
    books: Vec<FreqTable>,
}

impl FrequencyAccumulator {
    pub fn new(book_count: usize, stopwords: HashSet<String>, matcher: WindowMatcher) -> Self {
        Self {
            stopwords,
            matcher,
            aggregate: FreqTable::new(),
            books: vec![FreqTable::new(); book_count],
        }
    }

    /// Count one book's occurrences, in document order.
    ///
    /// Stopword lemmas are skipped entirely: not counted and not fed to
    /// the window matcher. Every token completion reported by the
    /// matcher rolls the constituent counts back out of both the
    /// aggregate and the current book's table and counts the token's
    /// name once in each. A completion that straddles a book boundary
    /// is charged to the book that finished it.
    pub fn process_book<I>(&mut self, book: usize, occurrences: I)
    where
        I: IntoIterator<Item = WordOccurrence>,
    {
        self.matcher.start_book();
        let mut folds = 0usize;
        for occurrence in occurrences {
            if self.stopwords.contains(&occurrence.lemma) {
                continue;
            }
            self.aggregate.increment(&occurrence.lemma);
            self.books[book - 1].increment(&occurrence.lemma);

            if let Some(completion) = self.matcher.push(occurrence) {
                for absorbed in &completion.consumed {
                    self.aggregate.decrement(&absorbed.lemma);
                    self.books[book - 1].decrement(&absorbed.lemma);
                }
                self.aggregate.increment(&completion.name);
                self.books[book - 1].increment(&completion.name);
                folds += 1;
            }
        }
        debug!(
            "book {}: {} keys, {} token folds",
            book,
            self.books[book - 1].len(),
            folds
        );
    }

    /// Finish the pass and hand the tables to the caller.
    pub fn finish(self) -> CorpusFrequencies {
        CorpusFrequencies {
            aggregate: self.aggregate,
            books: self.books,
        }
    }
}
