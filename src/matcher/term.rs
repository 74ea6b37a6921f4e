//! Single-position term patterns.

use crate::types::WordOccurrence;

/// The lemma half of a term pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LemmaPattern {
    /// `*` — matches any lemma.
    Wildcard,
    /// Exact lemma equality.
    Literal(String),
}

/// Matches one word occurrence against a lemma pattern plus optional
/// attribute constraints.
///
/// Attribute flags are single characters checked against the fixed
/// case position of the occurrence's morph code: a `G` flag requires a
/// genitive occurrence. A morph code too short to carry the checked
/// position is a non-match, not an error. The wildcard pattern matches
/// unconditionally and never consults the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatcher {
    pattern: LemmaPattern,
    flags: Vec<char>,
}

impl TermMatcher {
    /// Create a matcher from a lemma pattern and attribute flags.
    pub fn new(pattern: LemmaPattern, flags: impl IntoIterator<Item = char>) -> Self {
        Self {
            pattern,
            flags: flags.into_iter().collect(),
        }
    }

    /// Shorthand for a literal-lemma matcher without attribute flags.
    pub fn literal(lemma: &str) -> Self {
        Self::new(LemmaPattern::Literal(lemma.to_string()), [])
    }

    /// Shorthand for the wildcard matcher.
    pub fn wildcard() -> Self {
        Self::new(LemmaPattern::Wildcard, [])
    }

    /// Whether this matcher accepts the given occurrence.
    pub fn matches(&self, occurrence: &WordOccurrence) -> bool {
        let lemma = match &self.pattern {
            LemmaPattern::Wildcard => return true,
            LemmaPattern::Literal(lemma) => lemma,
        };
        if occurrence.lemma != *lemma {
            return false;
        }
        self.flags
            .iter()
            .all(|&flag| occurrence.case_char() == Some(flag))
    }
}
