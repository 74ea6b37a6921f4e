//! Memory-mapped reader for MorphGNT-style tagged corpus files.

use std::fs::File;
use std::path::Path;

use log::info;
use memmap2::Mmap;

use crate::types::{MotifError, MotifResult, WordOccurrence};

use super::{CorpusSource, BOOKS};

/// A whole corpus file parsed into per-book occurrence lists.
///
/// Lines carry seven whitespace-separated columns in the MorphGNT
/// layout: `ref pos parse text word normalized lemma`. `ref` is a
/// six-digit book/chapter/verse reference whose first two digits are
/// the 1-based book number; `parse` is the eight-character morph code;
/// `lemma` is the last column. Book numbers index the [`BOOKS`] table.
#[derive(Debug)]
pub struct TaggedCorpus {
    books: Vec<Vec<WordOccurrence>>,
    book_count: usize,
}

impl TaggedCorpus {
    /// Map and parse a corpus file.
    pub fn open(path: &Path) -> MotifResult<Self> {
        let file = File::open(path)?;
        // Safety: the mapping is read-only and dropped after parsing.
        let map = unsafe { Mmap::map(&file)? };
        let text = std::str::from_utf8(&map).map_err(|_| MotifError::CorpusFormat {
            line: 0,
            message: "corpus file is not valid UTF-8".to_string(),
        })?;
        let corpus = Self::parse(text)?;
        info!(
            "corpus {}: {} occurrences across {} books",
            path.display(),
            corpus.books.iter().map(Vec::len).sum::<usize>(),
            corpus.book_count
        );
        Ok(corpus)
    }

    /// Parse corpus text. Blank lines are ignored; any other deviation
    /// from the column layout is a [`MotifError::CorpusFormat`] carrying
    /// the line number.
    pub fn parse(text: &str) -> MotifResult<Self> {
        let mut books: Vec<Vec<WordOccurrence>> = vec![Vec::new(); BOOKS.len() - 1];
        for (number, raw) in text.lines().enumerate() {
            let line = number + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let columns: Vec<&str> = raw.split_whitespace().collect();
            if columns.len() != 7 {
                return Err(MotifError::CorpusFormat {
                    line,
                    message: format!("expected 7 columns, found {}", columns.len()),
                });
            }
            let book: usize = columns[0]
                .get(..2)
                .and_then(|digits| digits.parse().ok())
                .ok_or_else(|| MotifError::CorpusFormat {
                    line,
                    message: format!("malformed book reference {:?}", columns[0]),
                })?;
            if book == 0 || book > books.len() {
                return Err(MotifError::CorpusFormat {
                    line,
                    message: format!("book number {} out of range", book),
                });
            }
            books[book - 1].push(WordOccurrence {
                book,
                lemma: columns[6].to_string(),
                morph: columns[2].to_string(),
                text: columns[3].to_string(),
            });
        }
        let book_count = books
            .iter()
            .rposition(|occurrences| !occurrences.is_empty())
            .map(|index| index + 1)
            .unwrap_or(0);
        Ok(Self { books, book_count })
    }
}

impl CorpusSource for TaggedCorpus {
    fn book_count(&self) -> usize {
        self.book_count
    }

    fn book_abbrev(&self, book: usize) -> &str {
        BOOKS[book]
    }

    fn occurrences(&self, book: usize) -> MotifResult<Vec<WordOccurrence>> {
        Ok(self
            .books
            .get(book.wrapping_sub(1))
            .cloned()
            .unwrap_or_default())
    }
}
