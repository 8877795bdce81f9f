// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering a token window back into text, with or without highlights.
//!
//! The markers are literal bracketed tags, not ANSI escapes: downstream
//! consumers (web templates, the CLI display layer) decide what a highlight
//! looks like. The CLI rewrites them into terminal colors; a web host would
//! rewrite them into `<em>` tags.
//!
//! Markers wrap word text only, never the trailing punctuation and
//! whitespace - `[[HIGHLIGHT]]fox[[ENDHIGHLIGHT]], and` rather than
//! `[[HIGHLIGHT]]fox, [[ENDHIGHLIGHT]]and`. Runs of consecutive matching
//! tokens merge into a single span, including the separator text between
//! them.

use crate::types::ScoredToken;

/// Opening marker inserted before the first word of a matching run.
pub const HIGHLIGHT_OPEN: &str = "[[HIGHLIGHT]]";

/// Closing marker inserted after the last word of a matching run.
pub const HIGHLIGHT_CLOSE: &str = "[[ENDHIGHLIGHT]]";

/// Render a token window as plain text.
///
/// Concatenates each token's word and trailing run, then trims leading and
/// trailing whitespace. The empty window renders as the empty string.
pub fn render(tokens: &[ScoredToken]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.token.width()).sum());
    for scored in tokens {
        out.push_str(&scored.token.text);
        out.push_str(&scored.token.trailing);
    }
    out.trim().to_string()
}

/// Render a token window with matching runs wrapped in highlight markers.
///
/// Walks the tokens in order. Entering a matching token while outside a
/// span opens one; the span stays open across consecutive matches and
/// closes immediately after the last matched word, before its trailing
/// text. N consecutive matching tokens therefore produce exactly one
/// marker pair.
pub fn render_highlighted(tokens: &[ScoredToken]) -> String {
    let mut out = String::new();
    let mut in_span = false;

    for (i, scored) in tokens.iter().enumerate() {
        if scored.is_match && !in_span {
            out.push_str(HIGHLIGHT_OPEN);
            in_span = true;
        }

        out.push_str(&scored.token.text);

        if in_span {
            let next_is_match = tokens.get(i + 1).is_some_and(|next| next.is_match);
            if !next_is_match {
                out.push_str(HIGHLIGHT_CLOSE);
                in_span = false;
            }
        }

        out.push_str(&scored.token.trailing);
    }

    out.trim().to_string()
}
