// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the excerpt command-line interface.
//!
//! Three subcommands: `snip` to extract a highlighted snippet from a
//! document, `expand` to show what a query stems to against a word list,
//! and `tokens` to dump the scored token table for debugging. Documents are
//! read from a file path, or from stdin when the path is `-`.

pub mod display;

use clap::{Parser, Subcommand};

use excerpt::{DEFAULT_MAX_WORDS, DEFAULT_MIN_PRECEDING_WORDS};

#[derive(Parser)]
#[command(
    name = "excerpt",
    about = "Relevance-based snippet extraction and highlighting",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the most relevant snippet for a query
    Snip {
        /// Document file to extract from, or - for stdin
        file: String,

        /// Search query (whitespace-separated terms)
        #[arg(short, long)]
        query: String,

        /// Maximum snippet length in words
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,

        /// Guaranteed words of context before the best match
        #[arg(long, default_value_t = DEFAULT_MIN_PRECEDING_WORDS)]
        min_preceding: usize,

        /// Newline-separated word list for query stemming
        ///
        /// Without a word list every query term is matched verbatim.
        #[arg(short, long)]
        dictionary: Option<String>,

        /// Suppress highlight markers, print the plain snippet
        #[arg(long)]
        plain: bool,

        /// Print the full extraction result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the expanded term set for a query
    Expand {
        /// Search query (whitespace-separated terms)
        #[arg(short, long)]
        query: String,

        /// Newline-separated word list for query stemming
        #[arg(short, long)]
        dictionary: Option<String>,
    },

    /// Dump the scored token table for a document
    Tokens {
        /// Document file to tokenize, or - for stdin
        file: String,

        /// Query to score against; omit for an unscored dump
        #[arg(short, long)]
        query: Option<String>,

        /// Newline-separated word list for query stemming
        #[arg(short, long)]
        dictionary: Option<String>,
    },
}
