//! Shared fixtures for integration and property tests.

#![allow(dead_code)]

use std::collections::HashSet;

use excerpt::SnippetConfig;

/// A small English dictionary covering the words the test corpus uses.
pub fn english_dict() -> HashSet<String> {
    [
        "jump", "jumps", "jumped", "jumping", "run", "runs", "running", "quick", "brown", "fox",
        "foxes", "lazy", "dog", "dogs", "relevant", "sentence", "sentences", "filler", "word",
        "words", "pizza", "deep", "dish",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

/// A config with the given window size and no guaranteed preceding context.
pub fn config(max_words: usize) -> SnippetConfig {
    SnippetConfig::new(max_words, 0).unwrap()
}

/// A config with both knobs set.
pub fn config_with_context(max_words: usize, min_preceding: usize) -> SnippetConfig {
    SnippetConfig::new(max_words, min_preceding).unwrap()
}
