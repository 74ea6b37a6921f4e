//! Multi-word token matching over the occurrence stream.
//!
//! A [`TokenDefinition`] names a compound lexical unit ("son of god" as
//! one countable concept) and lists the term sequences that realize it.
//! The [`WindowMatcher`] keeps the trailing window of recent occurrences
//! and reports, for each new occurrence, whether some token just
//! completed so the accumulator can fold the constituent counts into
//! the token's synthetic name.

pub mod term;
pub mod token;
pub mod window;

pub use term::{LemmaPattern, TermMatcher};
pub use token::{TokenAlternative, TokenDefinition};
pub use window::{MatchPolicy, TokenMatch, WindowMatcher};
