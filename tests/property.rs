//! Property-based tests using proptest.
//!
//! These verify the extraction invariants for randomly generated documents
//! and queries: window bounds, fallback behavior, and highlight marker
//! pairing.

mod common;

use common::config;
use excerpt::{
    expand_query, extract, render_highlighted, score, select_window, tokenize, EmptyDictionary,
    QueryTermSet, SnippetConfig, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

/// Generate a separator: usually a space, sometimes punctuation.
fn separator_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        " ".to_string(),
        " ".to_string(),
        ". ".to_string(),
        ", ".to_string(),
        "; ".to_string(),
    ])
}

/// Generate random prose: words joined by random separators.
fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((word_strategy(), separator_strategy()), 1..60).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(word, sep)| format!("{}{}", word, sep))
            .collect()
    })
}

fn scored_pipeline(
    doc: &str,
    query: &str,
    config: &SnippetConfig,
) -> (Vec<excerpt::ScoredToken>, usize) {
    let tokens = tokenize(doc, config);
    let terms = expand_query(query, &EmptyDictionary);
    score(&tokens, &terms, config.max_window())
}

// ============================================================================
// WINDOW PROPERTIES
// ============================================================================

proptest! {
    /// Property: the window never exceeds max_words, whatever the inputs.
    #[test]
    fn prop_window_never_exceeds_max_words(
        doc in document_strategy(),
        query in word_strategy(),
        max_words in 1usize..20,
    ) {
        let cfg = config(max_words);
        let (scored, best) = scored_pipeline(&doc, &query, &cfg);
        let window = select_window(&scored, best, &cfg);
        prop_assert!(window.len() <= max_words);
    }

    /// Property: the window always contains the best-scoring token.
    #[test]
    fn prop_window_contains_best(
        doc in document_strategy(),
        query in word_strategy(),
        max_words in 1usize..20,
    ) {
        let cfg = config(max_words);
        let (scored, best) = scored_pipeline(&doc, &query, &cfg);
        prop_assume!(!scored.is_empty());
        let window = select_window(&scored, best, &cfg);
        prop_assert!(window.contains(best));
    }

    /// Property: a query that matches nothing anchors the window at the
    /// document start.
    #[test]
    fn prop_no_match_anchors_at_start(
        doc in document_strategy(),
        max_words in 1usize..20,
    ) {
        let cfg = config(max_words);
        // Query is outside [a-z]{2,8} by construction, so it cannot match.
        let (scored, best) = scored_pipeline(&doc, "zz99zz", &cfg);
        prop_assume!(!scored.is_empty());
        prop_assert_eq!(best, 0);
        let window = select_window(&scored, best, &cfg);
        prop_assert_eq!(window.first, 0);
    }

    /// Property: a window wider than the document selects the entire
    /// (trimmed) document.
    #[test]
    fn prop_whole_document_when_window_is_larger(
        doc in document_strategy(),
        query in word_strategy(),
    ) {
        let cfg = config(500);
        let result = extract(&doc, &query, &EmptyDictionary, &cfg);
        prop_assert_eq!(result.text, doc.trim());
    }

    /// Property: the best index is always within bounds for non-empty
    /// documents.
    #[test]
    fn prop_best_index_in_bounds(
        doc in document_strategy(),
        query in word_strategy(),
    ) {
        let cfg = config(10);
        let (scored, best) = scored_pipeline(&doc, &query, &cfg);
        prop_assume!(!scored.is_empty());
        prop_assert!(best < scored.len());
    }
}

// ============================================================================
// HIGHLIGHT PROPERTIES
// ============================================================================

proptest! {
    /// Property: opening and closing markers always come in pairs.
    #[test]
    fn prop_markers_balanced(
        doc in document_strategy(),
        query in word_strategy(),
        max_words in 1usize..30,
    ) {
        let cfg = config(max_words);
        let result = extract(&doc, &query, &EmptyDictionary, &cfg);
        let opens = result.highlighted.matches(HIGHLIGHT_OPEN).count();
        let closes = result.highlighted.matches(HIGHLIGHT_CLOSE).count();
        prop_assert_eq!(opens, closes);
    }

    /// Property: N consecutive matching tokens produce exactly one marker
    /// pair, never N pairs.
    #[test]
    fn prop_consecutive_matches_merge(
        word in word_strategy(),
        repeat in 1usize..10,
    ) {
        let doc = vec![word.clone(); repeat].join(" ");
        let cfg = config(50);
        let tokens = tokenize(&doc, &cfg);
        let terms: QueryTermSet = [word].into_iter().collect();
        let (scored, _) = score(&tokens, &terms, cfg.max_window());
        let highlighted = render_highlighted(&scored);
        prop_assert_eq!(highlighted.matches(HIGHLIGHT_OPEN).count(), 1);
        prop_assert_eq!(highlighted.matches(HIGHLIGHT_CLOSE).count(), 1);
    }

    /// Property: stripping the markers from the highlighted render yields
    /// the plain render.
    #[test]
    fn prop_highlight_reduces_to_plain(
        doc in document_strategy(),
        query in word_strategy(),
    ) {
        let cfg = config(30);
        let result = extract(&doc, &query, &EmptyDictionary, &cfg);
        let stripped = result
            .highlighted
            .replace(HIGHLIGHT_OPEN, "")
            .replace(HIGHLIGHT_CLOSE, "");
        prop_assert_eq!(stripped, result.text);
    }
}

// ============================================================================
// TOKENIZER PROPERTIES
// ============================================================================

proptest! {
    /// Property: concatenating every token's text and trailing run rebuilds
    /// the document (word-first documents have no leading junk to drop).
    #[test]
    fn prop_tokenize_rebuilds_document(doc in document_strategy()) {
        let cfg = config(10);
        let tokens = tokenize(&doc, &cfg);
        let rebuilt: String = tokens
            .iter()
            .map(|t| format!("{}{}", t.text, t.trailing))
            .collect();
        prop_assert_eq!(rebuilt, doc);
    }

    /// Property: token positions are sequential from zero.
    #[test]
    fn prop_positions_sequential(doc in document_strategy()) {
        let cfg = config(10);
        let tokens = tokenize(&doc, &cfg);
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.position, i);
        }
    }
}
