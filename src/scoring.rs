// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind snippet ranking.
//!
//! Every token gets a score approximating "net query matches minus
//! non-matches within the trailing scoring window". The token with the
//! highest score marks the densest cluster of query terms in the document,
//! and the selector builds the snippet around it.
//!
//! # The recurrence
//!
//! With window size `w` (default 60):
//!
//! ```text
//! contribution(i) = w    if token i matches a query term
//!                   -1   otherwise
//! s(i) = max(0, s(i-1) + contribution(i))          (s(-1) = 0)
//! s(i) = max(0, s(i) - s(i-w))                     when i >= w
//! ```
//!
//! A match spikes the score by `w`, then each following non-match decays it
//! by one. Subtracting `s(i-w)` cancels whatever a match contributed once
//! it falls out of the trailing window, which keeps the score *local*: a
//! lone match a thousand tokens ago cannot outrank two matches close
//! together here.
//!
//! # Key invariant: earliest maximum wins
//!
//! The best index is tracked with a strict `>` comparison, so ties keep the
//! earliest maximum. A document with no matches at all keeps every score at
//! zero and the best index at 0 - which is exactly the designed fallback:
//! no match means "snippet from the beginning of the document".

use crate::expand::QueryTermSet;
use crate::types::{ScoredToken, Token};
use crate::utils::normalize;

/// Score every token and locate the best one.
///
/// Single O(n) pass. Returns the scored sequence (same order and length as
/// the input) and the index of the first maximum-scoring token. For an
/// empty input the best index is 0, pointing at nothing; the selector
/// handles that by returning an empty window.
///
/// A token matches when its normalized text exactly equals one of the
/// expanded query terms. Substring and prefix matches do not count -
/// "irrelevant" does not match the query "relevant".
pub fn score(tokens: &[Token], terms: &QueryTermSet, max_window: usize) -> (Vec<ScoredToken>, usize) {
    let mut scored: Vec<ScoredToken> = Vec::with_capacity(tokens.len());
    let mut best_index = 0usize;
    let mut best_score = 0u32;

    for (i, token) in tokens.iter().enumerate() {
        let is_match = !terms.is_empty() && terms.contains(&normalize(&token.text));
        let contribution: i64 = if is_match { max_window as i64 } else { -1 };

        let previous: i64 = if i == 0 { 0 } else { scored[i - 1].score as i64 };
        let mut current = (previous + contribution).max(0);

        // Cancel the score that falls out of the trailing edge of the
        // window, clamping at zero to keep scores non-negative.
        if i >= max_window {
            current = (current - scored[i - max_window].score as i64).max(0);
        }

        let current = current as u32;
        if current > best_score {
            best_score = current;
            best_index = i;
        }

        scored.push(ScoredToken {
            token: token.clone(),
            is_match,
            score: current,
        });
    }

    (scored, best_index)
}
