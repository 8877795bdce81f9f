//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::HashSet;

use crate::types::{ScoredToken, Token};

/// Create a token with a single trailing space.
pub fn make_token(text: &str, position: usize) -> Token {
    Token {
        text: text.to_string(),
        trailing: " ".to_string(),
        clause_end: false,
        position,
    }
}

/// Create a clause-ending token (trailing text starts with a period).
pub fn make_clause_end(text: &str, position: usize) -> Token {
    Token {
        text: text.to_string(),
        trailing: ". ".to_string(),
        clause_end: true,
        position,
    }
}

/// Wrap a token with a score and match flag.
pub fn make_scored(token: Token, is_match: bool, score: u32) -> ScoredToken {
    ScoredToken {
        token,
        is_match,
        score,
    }
}

/// Build a dictionary from a word slice.
pub fn make_dict(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}
