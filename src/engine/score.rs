//! Motif score computation over the query term set.

use serde::Serialize;

use crate::types::{MotifError, MotifResult};

use super::accumulator::CorpusFrequencies;
use super::frequency::FrequencyModel;

/// One scored book, in corpus order.
#[derive(Debug, Clone, Serialize)]
pub struct BookScore {
    /// Abbreviated book name.
    pub book: String,
    /// Mean weighted augmented frequency over the query terms.
    pub score: f64,
}

/// Check that every query term appears in the aggregate table.
///
/// A term absorbed down to zero still counts as seen; only terms that
/// were never counted at all are reported. All missing names are
/// collected into one [`MotifError::UnknownTerm`] so a run fails with
/// the complete list rather than the first offender.
pub fn verify_terms(frequencies: &CorpusFrequencies, terms: &[String]) -> MotifResult<()> {
    if terms.is_empty() {
        return Err(MotifError::EmptyTermSet);
    }
    let missing: Vec<String> = terms
        .iter()
        .filter(|term| !frequencies.aggregate().contains(term))
        .cloned()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MotifError::UnknownTerm { terms: missing })
    }
}

/// Score every book for the given query terms.
///
/// `score(book) = (1 / |terms|) * Σ atf(book, term) * weight(term)`,
/// with the augmented frequency defaulting to 0 for a term the book
/// never counted. Term order does not affect the result beyond f64
/// rounding, and the term list is validated up front.
pub fn score_books(
    model: &FrequencyModel,
    frequencies: &CorpusFrequencies,
    terms: &[String],
) -> MotifResult<Vec<f64>> {
    verify_terms(frequencies, terms)?;
    let mut scores = Vec::with_capacity(model.book_count());
    for book in 1..=model.book_count() {
        let mut score = 0.0f64;
        for term in terms {
            let weight = model
                .global_weight(term)
                .ok_or_else(|| MotifError::UnknownTerm {
                    terms: vec![term.clone()],
                })?;
            score += model.atf(book, term) * weight;
        }
        scores.push(score / terms.len() as f64);
    }
    Ok(scores)
}
