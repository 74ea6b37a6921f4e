//! Token alternatives and named token definitions.

use crate::types::WordOccurrence;

use super::term::TermMatcher;

/// One alternative realization of a token: an ordered term sequence
/// matched position-aligned against the trailing entries of a window.
#[derive(Debug, Clone)]
pub struct TokenAlternative {
    terms: Vec<TermMatcher>,
}

impl TokenAlternative {
    pub fn new(terms: Vec<TermMatcher>) -> Self {
        Self { terms }
    }

    /// Number of consecutive occurrences this alternative spans.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Match against the trailing `len()` entries of `window`.
    ///
    /// No match while the window holds fewer occurrences than the
    /// alternative spans; a mismatch at any position aborts the whole
    /// alternative. On success the matched trailing slice is returned
    /// in order, so the caller can roll back the constituent counts.
    pub fn matches<'a>(&self, window: &'a [WordOccurrence]) -> Option<&'a [WordOccurrence]> {
        if window.len() < self.terms.len() {
            return None;
        }
        let tail = &window[window.len() - self.terms.len()..];
        for (matcher, occurrence) in self.terms.iter().zip(tail) {
            if !matcher.matches(occurrence) {
                return None;
            }
        }
        Some(tail)
    }
}

/// A named compound lexical unit with one or more alternatives.
///
/// Alternatives are tried in declaration order and the first match
/// wins; overlapping or ambiguous alternatives are resolved by that
/// order, never by longest match.
#[derive(Debug, Clone)]
pub struct TokenDefinition {
    name: String,
    alternatives: Vec<TokenAlternative>,
}

impl TokenDefinition {
    pub fn new(name: &str, alternatives: Vec<TokenAlternative>) -> Self {
        Self {
            name: name.to_string(),
            alternatives,
        }
    }

    /// The synthetic lexeme name counted in place of the constituents.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alternatives(&self) -> &[TokenAlternative] {
        &self.alternatives
    }

    /// First-match-wins over the alternatives, in declaration order.
    pub fn matches<'a>(&self, window: &'a [WordOccurrence]) -> Option<&'a [WordOccurrence]> {
        self.alternatives
            .iter()
            .find_map(|alternative| alternative.matches(window))
    }

    /// The widest alternative; bounds the sliding window size.
    pub fn match_width(&self) -> usize {
        self.alternatives
            .iter()
            .map(TokenAlternative::len)
            .max()
            .unwrap_or(0)
    }
}
