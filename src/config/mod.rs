//! Plain-text configuration parsing: stopword lists, token definition
//! files, and motif term lists.
//!
//! All three formats share the same line discipline: a `#` starts a
//! comment that runs to end of line, blank lines are ignored, and
//! surrounding whitespace is insignificant.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::matcher::{LemmaPattern, TermMatcher, TokenAlternative, TokenDefinition};
use crate::types::{MotifError, MotifResult};

/// Strip a `#` comment and surrounding whitespace from one line.
fn clean_line(line: &str) -> &str {
    let line = match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    };
    line.trim()
}

/// Parse a stopword list: one lemma per line.
pub fn parse_stopwords(text: &str) -> HashSet<String> {
    text.lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse a stopword file.
pub fn load_stopwords(path: &Path) -> MotifResult<HashSet<String>> {
    Ok(parse_stopwords(&fs::read_to_string(path)?))
}

/// Parse a token definition file: one `name = alt1 , alt2 , ...` per
/// non-blank line. `path` only labels error messages.
pub fn parse_token_definitions(path: &str, text: &str) -> MotifResult<Vec<TokenDefinition>> {
    let mut tokens = Vec::new();
    for (number, raw) in text.lines().enumerate() {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }
        tokens.push(parse_token_line(path, number + 1, line)?);
    }
    Ok(tokens)
}

/// Read and parse a token definition file.
pub fn load_token_definitions(path: &Path) -> MotifResult<Vec<TokenDefinition>> {
    parse_token_definitions(&path.display().to_string(), &fs::read_to_string(path)?)
}

fn config_error(path: &str, line: usize, message: String) -> MotifError {
    MotifError::ConfigFormat {
        path: path.to_string(),
        line,
        message,
    }
}

fn parse_token_line(path: &str, line_no: usize, line: &str) -> MotifResult<TokenDefinition> {
    let Some((name, definition)) = line.split_once('=') else {
        return Err(config_error(
            path,
            line_no,
            "token definition is missing '='".to_string(),
        ));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(config_error(path, line_no, "token name is empty".to_string()));
    }
    let mut alternatives = Vec::new();
    for alternative in definition.split(',') {
        let alternative = alternative.trim();
        if alternative.is_empty() {
            return Err(config_error(
                path,
                line_no,
                format!("token {:?} has an empty alternative", name),
            ));
        }
        let terms = alternative
            .split_whitespace()
            .map(|term| parse_term(path, line_no, term))
            .collect::<MotifResult<Vec<TermMatcher>>>()?;
        alternatives.push(TokenAlternative::new(terms));
    }
    Ok(TokenDefinition::new(name, alternatives))
}

/// One term of an alternative: `lemma` or `lemma:flags`, with `*` as
/// the wildcard lemma.
fn parse_term(path: &str, line_no: usize, term: &str) -> MotifResult<TermMatcher> {
    let (lemma, flags) = match term.split_once(':') {
        Some((lemma, flags)) => {
            if flags.is_empty() {
                return Err(config_error(
                    path,
                    line_no,
                    format!("term {:?} has empty attribute flags", term),
                ));
            }
            (lemma, flags)
        }
        None => (term, ""),
    };
    if lemma.is_empty() {
        return Err(config_error(
            path,
            line_no,
            format!("term {:?} has an empty lemma", term),
        ));
    }
    let pattern = if lemma == "*" {
        LemmaPattern::Wildcard
    } else {
        LemmaPattern::Literal(lemma.to_string())
    };
    Ok(TermMatcher::new(pattern, flags.chars()))
}

/// Parse a motif term list: one lemma or token name per line. The list
/// must be non-empty after comment stripping.
pub fn parse_motif_terms(text: &str) -> MotifResult<Vec<String>> {
    let terms: Vec<String> = text
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if terms.is_empty() {
        return Err(MotifError::EmptyTermSet);
    }
    Ok(terms)
}

/// Read and parse a motif term file.
pub fn load_motif_terms(path: &Path) -> MotifResult<Vec<String>> {
    parse_motif_terms(&fs::read_to_string(path)?)
}
