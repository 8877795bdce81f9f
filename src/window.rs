// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Window selection: turning a best-scoring token into a snippet range.
//!
//! The goal is the smallest window of at most `max_words` tokens that
//! contains the best token, starts and ends on clause boundaries when
//! possible, and keeps at least `min_preceding_words` of context before the
//! best match when the document allows it.
//!
//! # How the budget is spent
//!
//! When the best token sits deeper than `max_words` into the document, the
//! window cannot start at 0, so the earliest legal start is
//! `best + 1 - max_words`. From there the start is advanced - trimmed -
//! token by token until just after a clause end (a clean boundary) or until
//! the previous score exceeds the current one (the edge of a decay run that
//! a match is still influencing). Whatever the trim saves becomes slack,
//! and the slack is spent extending the window past the best token up to
//! the next clause end.
//!
//! Every step clamps: running out of document is normal, not an error.

use crate::config::SnippetConfig;
use crate::types::{ScoredToken, SnippetWindow};

/// Select the snippet window around the best-scoring token.
///
/// Guarantees, for non-empty input:
///
/// - `first <= best < last` (the window contains the best token)
/// - `last - first <= max_words`
/// - `first >= best + 1 - max_words` (trim never overshoots)
///
/// An empty input yields the empty window `[0, 0)`. A `best` past the end
/// of the sequence is clamped to the last token rather than propagated as
/// a fault.
pub fn select_window(
    scored: &[ScoredToken],
    best: usize,
    config: &SnippetConfig,
) -> SnippetWindow {
    if scored.is_empty() {
        return SnippetWindow { first: 0, last: 0 };
    }

    let best = best.min(scored.len() - 1);
    let max_words = config.max_words();

    // The whole document fits: no trimming, no clause hunting.
    if scored.len() <= max_words {
        return SnippetWindow {
            first: 0,
            last: scored.len(),
        };
    }

    let first = if best + 1 <= max_words {
        // The whole prefix fits; anchor at the document start.
        0
    } else {
        let min_start = best + 1 - max_words;
        let mut first = min_start;
        let scan_limit = min_start.saturating_add(config.max_window()).min(best);

        // Trim forward to the earliest clean start: either the token after
        // a clause end, or the point where the previous score rises above
        // the current one (trimming further would cut into the run a match
        // is still influencing).
        while first < scan_limit {
            let previous = &scored[first - 1];
            if previous.score > scored[first].score || previous.token.clause_end {
                break;
            }
            first += 1;
        }

        // Restore trimmed context if the trim left too little of it.
        if best - first < config.min_preceding_words() {
            first = min_start.max(best - config.min_preceding_words());
        }

        first
    };

    // Unused front budget becomes slack for the tail: extend past the best
    // token, stopping just after the first clause end found.
    let slack = max_words - (best + 1 - first);
    let mut last = best + 1;
    let mut remaining = slack;
    while remaining > 0 && last < scored.len() {
        let reached_clause_end = scored[last].token.clause_end;
        last += 1;
        remaining -= 1;
        if reached_clause_end {
            break;
        }
    }

    SnippetWindow {
        first,
        last: last.min(scored.len()),
    }
}
