//! The counting, normalization, and scoring passes.

use std::collections::HashSet;

use crate::corpus::CorpusSource;
use crate::matcher::{MatchPolicy, TokenDefinition, WindowMatcher};
use crate::types::MotifResult;

pub mod accumulator;
pub mod frequency;
pub mod score;

pub use accumulator::{CorpusFrequencies, FreqTable, FrequencyAccumulator};
pub use frequency::FrequencyModel;
pub use score::{score_books, verify_terms, BookScore};

/// One counting pass over every book of a corpus.
pub fn count_corpus(
    corpus: &dyn CorpusSource,
    stopwords: HashSet<String>,
    tokens: Vec<TokenDefinition>,
    policy: MatchPolicy,
) -> MotifResult<CorpusFrequencies> {
    let matcher = WindowMatcher::new(tokens, policy);
    let mut accumulator = FrequencyAccumulator::new(corpus.book_count(), stopwords, matcher);
    for book in 1..=corpus.book_count() {
        accumulator.process_book(book, corpus.occurrences(book)?);
    }
    Ok(accumulator.finish())
}

/// Run the full pipeline: count, verify the query terms, build the
/// frequency model, and score every book.
pub fn run_pipeline(
    corpus: &dyn CorpusSource,
    stopwords: HashSet<String>,
    tokens: Vec<TokenDefinition>,
    policy: MatchPolicy,
    terms: &[String],
) -> MotifResult<Vec<BookScore>> {
    let frequencies = count_corpus(corpus, stopwords, tokens, policy)?;
    verify_terms(&frequencies, terms)?;
    let model = FrequencyModel::build(&frequencies)?;
    let scores = score_books(&model, &frequencies, terms)?;
    Ok(scores
        .into_iter()
        .enumerate()
        .map(|(index, score)| BookScore {
            book: corpus.book_abbrev(index + 1).to_string(),
            score,
        })
        .collect())
}
