// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of snippet extraction.
//!
//! Each pipeline stage consumes one of these types and produces the next:
//! the tokenizer emits `Token`s, the scorer wraps them into `ScoredToken`s,
//! the selector narrows those to a `SnippetWindow`, and the highlighter
//! renders the windowed slice. Values flow forward; nothing is mutated after
//! construction, so a stage can never observe another stage's intermediate
//! state.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Token**: `position` is the token's index in document order. The
//!   tokenizer assigns positions sequentially from 0; everything downstream
//!   indexes with them.
//!
//! - **ScoredToken**: `score` is non-negative by type (`u32`). `is_match` is
//!   true only when the normalized word text equals an expanded query term
//!   exactly.
//!
//! - **SnippetWindow**: half-open `[first, last)` with `first <= last`, both
//!   within the token sequence it was derived from. Never empty for a
//!   non-empty document.

use serde::{Deserialize, Serialize};

/// A word plus its trailing separator text.
///
/// This is the unit of scoring and selection. Keeping the trailing run
/// (punctuation and whitespace) attached to the word means rendering a
/// window is just concatenation - no re-parsing of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// The word text, exactly as it appeared in the document.
    pub text: String,
    /// Everything between this word and the next: punctuation, whitespace.
    pub trailing: String,
    /// Does the trailing text begin with a clause indicator?
    ///
    /// Clause-end tokens are preferred snippet boundaries: the selector
    /// starts windows just after them and ends windows on them.
    pub clause_end: bool,
    /// Index of this token in document order.
    pub position: usize,
}

impl Token {
    /// Byte length of the token's full extent (word plus trailing run).
    pub fn width(&self) -> usize {
        self.text.len() + self.trailing.len()
    }
}

/// A token annotated with its relevance score.
///
/// Produced by the scorer in a single pass. `score` approximates "net query
/// matches minus non-matches within the trailing scoring window" - see the
/// `scoring` module for the exact recurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredToken {
    #[serde(flatten)]
    pub token: Token,
    /// True iff the normalized word text equals an expanded query term.
    pub is_match: bool,
    /// Windowed relevance score. Floored at zero by construction.
    pub score: u32,
}

/// A contiguous half-open range `[first, last)` into a token sequence.
///
/// Derived by the selector, never mutated afterwards. `slice` clamps rather
/// than panics: a window that outlives its token sequence (which should not
/// happen, but index bugs love boundaries) degrades to a shorter slice
/// instead of a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetWindow {
    pub first: usize,
    pub last: usize,
}

impl SnippetWindow {
    /// Number of tokens in the window.
    pub fn len(&self) -> usize {
        self.last.saturating_sub(self.first)
    }

    /// True when the window selects no tokens (empty document).
    pub fn is_empty(&self) -> bool {
        self.last <= self.first
    }

    /// Does the window contain this token position?
    pub fn contains(&self, position: usize) -> bool {
        position >= self.first && position < self.last
    }

    /// The windowed slice of a scored token sequence, clamped to bounds.
    pub fn slice<'a>(&self, tokens: &'a [ScoredToken]) -> &'a [ScoredToken] {
        let first = self.first.min(tokens.len());
        let last = self.last.min(tokens.len());
        &tokens[first..last.max(first)]
    }
}

/// Everything one extraction produced, bundled for display and `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetResult {
    /// The plain snippet, trimmed.
    pub text: String,
    /// The snippet with `[[HIGHLIGHT]]` / `[[ENDHIGHLIGHT]]` markers.
    pub highlighted: String,
    /// Window start (token position, inclusive).
    pub first: usize,
    /// Window end (token position, exclusive).
    pub last: usize,
    /// Position of the best-scoring token the window was built around.
    pub best_index: usize,
    /// The expanded query terms that were matched against, sorted.
    pub terms: Vec<String>,
}
