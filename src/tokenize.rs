// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document tokenization: one linear pass, one token per word.
//!
//! A token is a maximal run of word characters plus the run of non-word
//! characters that follows it. Splitting this way keeps every byte of the
//! document (after any leading punctuation) owned by exactly one token, so
//! the highlighter can rebuild any window by concatenation alone.
//!
//! Word characters are letters, digits, apostrophe, backtick, and double
//! quote - "don't" and "rock`n`roll" stay single tokens. This is
//! deliberately naive about Unicode word segmentation; documents are
//! assumed to be prose.

use crate::config::SnippetConfig;
use crate::types::Token;

/// Is this character part of a word?
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '\'' | '`' | '"')
}

/// Split a document into word tokens with trailing separator runs.
///
/// Deterministic, no hidden state, O(n) in document length. An empty
/// document (or one with no word characters at all) yields an empty
/// sequence. Leading non-word text before the first word belongs to no
/// token and is dropped, matching the match-based splitting this replaces.
///
/// A token is flagged `clause_end` when its trailing text *begins* with a
/// clause indicator from `config`: "sentence. Next" ends a clause,
/// "sentence (aside)" does not.
pub fn tokenize(document: &str, config: &SnippetConfig) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = document.char_indices().peekable();

    // Leading non-word run, attached to nothing.
    while let Some(&(_, c)) = chars.peek() {
        if is_word_char(c) {
            break;
        }
        chars.next();
    }

    while let Some(&(start, _)) = chars.peek() {
        // Word run.
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if !is_word_char(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }

        // Trailing non-word run: punctuation and whitespace up to the next word.
        let trail_start = end;
        let mut trail_end = trail_start;
        while let Some(&(i, c)) = chars.peek() {
            if is_word_char(c) {
                break;
            }
            trail_end = i + c.len_utf8();
            chars.next();
        }

        let trailing = &document[trail_start..trail_end];
        let clause_end = trailing
            .chars()
            .next()
            .is_some_and(|c| config.is_clause_indicator(c));

        tokens.push(Token {
            text: document[start..end].to_string(),
            trailing: trailing.to_string(),
            clause_end,
            position: tokens.len(),
        });
    }

    tokens
}
