//! Token matching tests: term patterns, alternatives, declaration-order
//! tie-breaks, and sliding-window policies.

use motif_score::{
    LemmaPattern, MatchPolicy, TermMatcher, TokenAlternative, TokenDefinition, WindowMatcher,
    WordOccurrence,
};

// ==================== Helpers ====================

/// An occurrence with a neutral morph code.
fn occ(lemma: &str) -> WordOccurrence {
    occ_tagged(lemma, "--------")
}

/// An occurrence with an explicit morph code.
fn occ_tagged(lemma: &str, morph: &str) -> WordOccurrence {
    WordOccurrence {
        book: 1,
        lemma: lemma.to_string(),
        morph: morph.to_string(),
        text: lemma.to_string(),
    }
}

/// A single-alternative token over literal lemmas.
fn token(name: &str, lemmas: &[&str]) -> TokenDefinition {
    TokenDefinition::new(
        name,
        vec![TokenAlternative::new(
            lemmas.iter().map(|lemma| TermMatcher::literal(lemma)).collect(),
        )],
    )
}

// ==================== TermMatcher ====================

#[test]
fn test_wildcard_matches_any_lemma() {
    let matcher = TermMatcher::wildcard();
    assert!(matcher.matches(&occ("alpha")));
    assert!(matcher.matches(&occ("beta")));
    assert!(matcher.matches(&occ("")));
}

#[test]
fn test_wildcard_ignores_attribute_flags() {
    // The wildcard short-circuits before attribute checks.
    let matcher = TermMatcher::new(LemmaPattern::Wildcard, ['G']);
    assert!(matcher.matches(&occ_tagged("alpha", "----NSF-")));
}

#[test]
fn test_literal_requires_lemma_equality() {
    let matcher = TermMatcher::literal("alpha");
    assert!(matcher.matches(&occ("alpha")));
    assert!(!matcher.matches(&occ("beta")));
}

#[test]
fn test_attribute_flag_checks_case_position() {
    let matcher = TermMatcher::new(LemmaPattern::Literal("alpha".to_string()), ['G']);
    assert!(matcher.matches(&occ_tagged("alpha", "----GSF-")));
    assert!(!matcher.matches(&occ_tagged("alpha", "----NSF-")));
}

#[test]
fn test_short_morph_code_is_non_match() {
    let matcher = TermMatcher::new(LemmaPattern::Literal("alpha".to_string()), ['G']);
    assert!(!matcher.matches(&occ_tagged("alpha", "---")));
}

// ==================== TokenAlternative ====================

#[test]
fn test_alternative_no_match_below_window_length() {
    let alternative = TokenAlternative::new(vec![
        TermMatcher::literal("alpha"),
        TermMatcher::literal("beta"),
    ]);
    assert!(alternative.matches(&[]).is_none());
    assert!(alternative.matches(&[occ("alpha")]).is_none());
}

#[test]
fn test_alternative_matches_trailing_entries() {
    let alternative = TokenAlternative::new(vec![
        TermMatcher::literal("beta"),
        TermMatcher::literal("gamma"),
    ]);
    let window = [occ("alpha"), occ("beta"), occ("gamma")];
    let matched = alternative.matches(&window).expect("trailing pair matches");
    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].lemma, "beta");
    assert_eq!(matched[1].lemma, "gamma");
}

#[test]
fn test_alternative_single_mismatch_aborts() {
    let alternative = TokenAlternative::new(vec![
        TermMatcher::literal("alpha"),
        TermMatcher::literal("beta"),
    ]);
    let window = [occ("alpha"), occ("gamma")];
    assert!(alternative.matches(&window).is_none());
}

// ==================== TokenDefinition ====================

#[test]
fn test_first_alternative_wins_by_declaration_order() {
    // Both alternatives match the same window; the 1-wide one is
    // declared first and wins even though the 2-wide one is "longer".
    let definition = TokenDefinition::new(
        "tok",
        vec![
            TokenAlternative::new(vec![TermMatcher::literal("beta")]),
            TokenAlternative::new(vec![
                TermMatcher::literal("alpha"),
                TermMatcher::literal("beta"),
            ]),
        ],
    );
    let window = [occ("alpha"), occ("beta")];
    let matched = definition.matches(&window).expect("first alternative");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].lemma, "beta");
}

#[test]
fn test_match_width_is_max_alternative_length() {
    let definition = TokenDefinition::new(
        "tok",
        vec![
            TokenAlternative::new(vec![TermMatcher::literal("alpha")]),
            TokenAlternative::new(vec![
                TermMatcher::literal("alpha"),
                TermMatcher::literal("beta"),
                TermMatcher::literal("gamma"),
            ]),
        ],
    );
    assert_eq!(definition.match_width(), 3);
}

// ==================== WindowMatcher ====================

#[test]
fn test_window_capacity_is_max_token_width() {
    let matcher = WindowMatcher::new(
        vec![token("ab", &["alpha", "beta"]), token("xyz", &["x", "y", "z"])],
        MatchPolicy::default(),
    );
    assert_eq!(matcher.capacity(), 3);
}

#[test]
fn test_window_no_tokens_never_matches() {
    let mut matcher = WindowMatcher::new(Vec::new(), MatchPolicy::default());
    assert!(matcher.push(occ("alpha")).is_none());
    assert!(matcher.push(occ("beta")).is_none());
}

#[test]
fn test_window_reports_completed_token() {
    let mut matcher = WindowMatcher::new(
        vec![token("pair", &["alpha", "beta"])],
        MatchPolicy::default(),
    );
    assert!(matcher.push(occ("alpha")).is_none());
    let hit = matcher.push(occ("beta")).expect("pair completes");
    assert_eq!(hit.name, "pair");
    assert_eq!(hit.consumed.len(), 2);
    assert_eq!(hit.consumed[0].lemma, "alpha");
    assert_eq!(hit.consumed[1].lemma, "beta");
}

#[test]
fn test_window_first_token_wins() {
    // Both tokens complete on the same window; only the earlier
    // declared one is reported and later tokens are not evaluated.
    let mut matcher = WindowMatcher::new(
        vec![token("first", &["beta"]), token("second", &["alpha", "beta"])],
        MatchPolicy::default(),
    );
    assert!(matcher.push(occ("alpha")).is_none());
    let hit = matcher.push(occ("beta")).expect("one token completes");
    assert_eq!(hit.name, "first");
}

#[test]
fn test_window_one_match_per_push() {
    // A push that completes one token reports exactly one match even
    // when several tokens would fit.
    let mut matcher = WindowMatcher::new(
        vec![token("ab", &["alpha", "beta"]), token("b", &["beta"])],
        MatchPolicy::default(),
    );
    assert!(matcher.push(occ("alpha")).is_none());
    let hit = matcher.push(occ("beta")).expect("completion");
    assert_eq!(hit.name, "ab");
}

#[test]
fn test_window_match_does_not_evict_entries() {
    // Consumed entries stay in the buffer: with reuse allowed, a
    // triple of alphas completes the alpha-alpha token twice.
    let mut matcher = WindowMatcher::new(
        vec![token("double", &["alpha", "alpha"])],
        MatchPolicy::default(),
    );
    assert!(matcher.push(occ("alpha")).is_none());
    assert!(matcher.push(occ("alpha")).is_some());
    assert!(matcher.push(occ("alpha")).is_some());
}

#[test]
fn test_window_no_reuse_blocks_overlap() {
    let policy = MatchPolicy {
        reuse_consumed: false,
        ..MatchPolicy::default()
    };
    let mut matcher = WindowMatcher::new(vec![token("double", &["alpha", "alpha"])], policy);
    assert!(matcher.push(occ("alpha")).is_none());
    assert!(matcher.push(occ("alpha")).is_some());
    // The middle alpha is already consumed, so the third cannot pair
    // with it.
    assert!(matcher.push(occ("alpha")).is_none());
    // A fresh pair after the blocked push completes again.
    assert!(matcher.push(occ("alpha")).is_some());
}

#[test]
fn test_window_no_reuse_falls_back_to_unconsumed_alternative() {
    // The first alternative touches a consumed entry; the second does
    // not and must win under the no-reuse policy.
    let policy = MatchPolicy {
        reuse_consumed: false,
        ..MatchPolicy::default()
    };
    let definition = TokenDefinition::new(
        "tok",
        vec![
            TokenAlternative::new(vec![
                TermMatcher::literal("alpha"),
                TermMatcher::literal("beta"),
            ]),
            TokenAlternative::new(vec![TermMatcher::literal("beta")]),
        ],
    );
    let mut matcher = WindowMatcher::new(
        vec![token("double", &["alpha", "alpha"]), definition],
        policy,
    );
    assert!(matcher.push(occ("alpha")).is_none());
    assert_eq!(matcher.push(occ("alpha")).unwrap().name, "double");
    let hit = matcher.push(occ("beta")).expect("second alternative");
    assert_eq!(hit.name, "tok");
    assert_eq!(hit.consumed.len(), 1);
}

#[test]
fn test_window_reset_at_book_start() {
    let policy = MatchPolicy {
        reset_at_book_boundary: true,
        ..MatchPolicy::default()
    };
    let mut matcher = WindowMatcher::new(vec![token("pair", &["alpha", "beta"])], policy);
    assert!(matcher.push(occ("alpha")).is_none());
    matcher.start_book();
    // The alpha from the previous book is gone.
    assert!(matcher.push(occ("beta")).is_none());
}

#[test]
fn test_window_persists_across_books_by_default() {
    let mut matcher = WindowMatcher::new(
        vec![token("pair", &["alpha", "beta"])],
        MatchPolicy::default(),
    );
    assert!(matcher.push(occ("alpha")).is_none());
    matcher.start_book();
    assert!(matcher.push(occ("beta")).is_some());
}
