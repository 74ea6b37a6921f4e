//! Augmented term frequencies and corpus-wide weights.

use std::collections::HashMap;

use log::debug;

use crate::types::{MotifError, MotifResult};

use super::accumulator::CorpusFrequencies;

/// Per-book augmented frequencies plus one global weight per lexeme.
///
/// The augmented frequency normalizes a raw count against the book's
/// own most frequent lexeme, `log2(1 + freq / max_freq)`, saturating
/// toward 1.0 as the lexeme approaches the book's maximum. The global
/// weight is an inverse-document-frequency analogue,
/// `1 - mean(atf over the books whose table carries the key)`: lexemes
/// that are uniformly frequent everywhere weigh little, lexemes
/// concentrated in few books weigh a lot.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    book_atfs: Vec<HashMap<String, f64>>,
    global_weights: HashMap<String, f64>,
}

impl FrequencyModel {
    /// Derive the model from a finished counting pass.
    ///
    /// Every entry of a book's table gets an augmented frequency,
    /// including entries token absorption drove to zero or below. A
    /// book whose table has no positive count has an undefined maximum
    /// and fails with [`MotifError::EmptyBook`].
    pub fn build(frequencies: &CorpusFrequencies) -> MotifResult<Self> {
        let mut book_atfs = Vec::with_capacity(frequencies.books().len());
        let mut collected: HashMap<String, Vec<f64>> = HashMap::new();

        for (index, table) in frequencies.books().iter().enumerate() {
            let max_freq = table
                .max_count()
                .filter(|&max| max > 0)
                .ok_or(MotifError::EmptyBook { book: index + 1 })?
                as f64;
            let mut atfs = HashMap::with_capacity(table.len());
            for (lexeme, freq) in table.iter() {
                let atf = (1.0 + freq as f64 / max_freq).log2();
                atfs.insert(lexeme.to_string(), atf);
                collected.entry(lexeme.to_string()).or_default().push(atf);
            }
            book_atfs.push(atfs);
        }

        // Per-lexeme values were pushed in book order, so the mean is
        // summed in a fixed order and reruns are bit-identical.
        let global_weights: HashMap<String, f64> = collected
            .into_iter()
            .map(|(lexeme, atfs)| {
                let mean = atfs.iter().sum::<f64>() / atfs.len() as f64;
                (lexeme, 1.0 - mean)
            })
            .collect();

        debug!(
            "frequency model: {} lexemes across {} books",
            global_weights.len(),
            book_atfs.len()
        );
        Ok(Self {
            book_atfs,
            global_weights,
        })
    }

    /// Number of books the model covers.
    pub fn book_count(&self) -> usize {
        self.book_atfs.len()
    }

    /// The augmented frequency of a term in a 1-based book; 0.0 when
    /// the term was never counted there.
    pub fn atf(&self, book: usize, term: &str) -> f64 {
        self.book_atfs
            .get(book.wrapping_sub(1))
            .and_then(|atfs| atfs.get(term))
            .copied()
            .unwrap_or(0.0)
    }

    /// The corpus-wide weight of a term, if the term was ever counted.
    pub fn global_weight(&self, term: &str) -> Option<f64> {
        self.global_weights.get(term).copied()
    }
}
