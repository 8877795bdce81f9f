// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the excerpt CLI.
//!
//! The library emits literal `[[HIGHLIGHT]]` markers; this module rewrites
//! them into ANSI escapes when stdout is an interactive terminal. Pipelines
//! and redirects get the literal markers so downstream tools can do their
//! own rewriting. Respects `NO_COLOR` for the purists.

use excerpt::{ScoredToken, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold yellow for matched terms.
    pub const HIGHLIGHT: &str = "\x1b[1;33m";
    /// Reset to default.
    pub const RESET: &str = "\x1b[0m";
    /// Dim gray for table chrome.
    pub const DIM: &str = "\x1b[2m";
}

/// Should output use ANSI colors?
///
/// True only when stdout is a TTY and `NO_COLOR` is unset.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Rewrite literal highlight markers into ANSI bold yellow.
pub fn colorize_markers(snippet: &str) -> String {
    snippet
        .replace(HIGHLIGHT_OPEN, colors::HIGHLIGHT)
        .replace(HIGHLIGHT_CLOSE, colors::RESET)
}

/// Format the scored token table for the `tokens` subcommand.
///
/// One row per token: position, score, match and clause-end flags, and the
/// word text. Plain fixed-width columns; this is a debugging view, not a
/// report.
pub fn format_token_table(tokens: &[ScoredToken], color: bool) -> String {
    let mut out = String::new();
    let header = format!("{:>5}  {:>6}  {:^5}  {:^6}  WORD\n", "POS", "SCORE", "MATCH", "CLAUSE");
    if color {
        out.push_str(colors::DIM);
        out.push_str(&header);
        out.push_str(colors::RESET);
    } else {
        out.push_str(&header);
    }

    for scored in tokens {
        let word = if color && scored.is_match {
            format!("{}{}{}", colors::HIGHLIGHT, scored.token.text, colors::RESET)
        } else {
            scored.token.text.clone()
        };
        out.push_str(&format!(
            "{:>5}  {:>6}  {:^5}  {:^6}  {}\n",
            scored.token.position,
            scored.score,
            if scored.is_match { "*" } else { "" },
            if scored.token.clause_end { ";" } else { "" },
            word,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use excerpt::testing::{make_scored, make_token};

    #[test]
    fn test_colorize_markers() {
        let colored = colorize_markers("a [[HIGHLIGHT]]fox[[ENDHIGHLIGHT]] ran");
        assert_eq!(colored, "a \x1b[1;33mfox\x1b[0m ran");
    }

    #[test]
    fn test_colorize_without_markers_is_identity() {
        assert_eq!(colorize_markers("no markers here"), "no markers here");
    }

    #[test]
    fn test_token_table_lists_every_token() {
        let tokens = vec![
            make_scored(make_token("the", 0), false, 0),
            make_scored(make_token("fox", 1), true, 60),
        ];
        let table = format_token_table(&tokens, false);
        assert!(table.contains("the"));
        assert!(table.contains("fox"));
        assert!(table.contains("60"));
        assert!(table.contains('*'));
    }
}
