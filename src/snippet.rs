// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The full extraction pipeline, one call deep.
//!
//! ```text
//! tokenize ──▶ score ──▶ select_window ──▶ render / render_highlighted
//!                 ▲
//!         expand_query ◀── Dictionary
//! ```
//!
//! Each request is self-contained: tokenization, scoring, selection, and
//! rendering run sequentially over immutable values, sharing nothing with
//! other requests except the read-only dictionary. Hosts that want to
//! parallelize across requests can call these functions from as many
//! threads as they like.

use crate::config::SnippetConfig;
use crate::expand::{expand_query, Dictionary};
use crate::highlight::{render, render_highlighted};
use crate::scoring::score;
use crate::tokenize::tokenize;
use crate::types::SnippetResult;
use crate::window::select_window;

/// Run the whole pipeline and return every artifact of the extraction.
///
/// This is the workhorse behind [`extract_snippet`] and [`highlight_doc`];
/// the CLI uses it directly for `--json` output. An empty document yields
/// an empty snippet, not an error.
pub fn extract(
    document: &str,
    query: &str,
    dict: &dyn Dictionary,
    config: &SnippetConfig,
) -> SnippetResult {
    let tokens = tokenize(document, config);
    let terms = expand_query(query, dict);
    let (scored, best_index) = score(&tokens, &terms, config.max_window());
    let window = select_window(&scored, best_index, config);
    let slice = window.slice(&scored);

    let mut sorted_terms: Vec<String> = terms.into_iter().collect();
    sorted_terms.sort();

    SnippetResult {
        text: render(slice),
        highlighted: render_highlighted(slice),
        first: window.first,
        last: window.last,
        best_index,
        terms: sorted_terms,
    }
}

/// The most relevant snippet of `document` for `query`, as plain text.
pub fn extract_snippet(
    document: &str,
    query: &str,
    dict: &dyn Dictionary,
    config: &SnippetConfig,
) -> String {
    extract(document, query, dict, config).text
}

/// The most relevant snippet of `document` for `query`, with the matched
/// words wrapped in `[[HIGHLIGHT]]` / `[[ENDHIGHLIGHT]]` markers.
pub fn highlight_doc(
    document: &str,
    query: &str,
    dict: &dyn Dictionary,
    config: &SnippetConfig,
) -> String {
    extract(document, query, dict, config).highlighted
}
