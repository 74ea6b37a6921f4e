//! Sliding-window evaluation of token definitions over the occurrence
//! stream.

use log::debug;

use crate::types::WordOccurrence;

use super::token::TokenDefinition;

/// Policy knobs for window behavior at book boundaries and for
/// overlapping matches.
///
/// Both defaults reproduce the literal behavior of the corpus stream
/// this tool was originally built against: one window carried across
/// every book, and occurrences already folded into a token staying
/// eligible for later overlapping matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Clear the window when a new book starts. When `false`, a token
    /// may straddle two books.
    pub reset_at_book_boundary: bool,
    /// Whether occurrences already folded into a token may take part in
    /// later overlapping matches. When `false`, an alternative whose
    /// trailing slice touches a consumed entry does not match.
    pub reuse_consumed: bool,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            reset_at_book_boundary: false,
            reuse_consumed: true,
        }
    }
}

/// A reported token completion: the token's synthetic name and the
/// occurrences it absorbed, in stream order.
#[derive(Debug, Clone)]
pub struct TokenMatch {
    pub name: String,
    pub consumed: Vec<WordOccurrence>,
}

/// Bounded FIFO of the most recent occurrences, evaluated against every
/// configured token definition as the stream advances.
///
/// Capacity is the maximum match width over all tokens. At most one
/// token consumes any given window evaluation: tokens are tried in
/// configured order and the first whose alternative matches wins;
/// remaining tokens are not evaluated. A match never evicts window
/// entries — eviction is driven purely by new occurrences arriving.
pub struct WindowMatcher {
    tokens: Vec<TokenDefinition>,
    policy: MatchPolicy,
    capacity: usize,
    window: Vec<WordOccurrence>,
    consumed: Vec<bool>,
}

impl WindowMatcher {
    pub fn new(tokens: Vec<TokenDefinition>, policy: MatchPolicy) -> Self {
        let capacity = tokens
            .iter()
            .map(TokenDefinition::match_width)
            .max()
            .unwrap_or(0);
        debug!(
            "window matcher: {} tokens, capacity {}, policy {:?}",
            tokens.len(),
            capacity,
            policy
        );
        Self {
            tokens,
            policy,
            capacity,
            window: Vec::with_capacity(capacity),
            consumed: Vec::with_capacity(capacity),
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Window capacity: the maximum match width over all tokens.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything seen so far.
    pub fn clear(&mut self) {
        self.window.clear();
        self.consumed.clear();
    }

    /// Called by the accumulator when a new book begins.
    pub fn start_book(&mut self) {
        if self.policy.reset_at_book_boundary {
            self.clear();
        }
    }

    /// Append one occurrence and evaluate all token definitions against
    /// the updated window. Returns the first token completion, if any.
    pub fn push(&mut self, occurrence: WordOccurrence) -> Option<TokenMatch> {
        if self.tokens.is_empty() {
            return None;
        }
        self.window.push(occurrence);
        self.consumed.push(false);
        if self.window.len() > self.capacity {
            self.window.remove(0);
            self.consumed.remove(0);
        }

        for token in &self.tokens {
            let matched = token.alternatives().iter().find_map(|alternative| {
                let tail = alternative.matches(&self.window)?;
                let start = self.window.len() - tail.len();
                if !self.policy.reuse_consumed && self.consumed[start..].iter().any(|&used| used) {
                    return None;
                }
                Some(tail.to_vec())
            });
            if let Some(consumed) = matched {
                let start = self.window.len() - consumed.len();
                for flag in &mut self.consumed[start..] {
                    *flag = true;
                }
                return Some(TokenMatch {
                    name: token.name().to_string(),
                    consumed,
                });
            }
        }
        None
    }
}
