//! Relevance-based snippet extraction and highlighting.
//!
//! Given a document and a search query, this crate finds the contiguous
//! window of text that best concentrates the query terms, trims it to
//! clause boundaries, and marks the matching words for display.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ tokenize.rs │────▶│ scoring.rs  │────▶│  window.rs  │────▶│ highlight.rs │
//! │   (Token)   │     │(ScoredToken,│     │(SnippetWin- │     │ (render,     │
//! │             │     │ best index) │     │    dow)     │     │  markers)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//!                            ▲
//!                     ┌─────────────┐
//!                     │  expand.rs  │  query terms, stemmed against an
//!                     │(QueryTermSet)│ injected Dictionary
//!                     └─────────────┘
//! ```
//!
//! The pipeline is pure: each stage consumes the previous stage's output by
//! value or shared reference and produces a new immutable value. The only
//! shared state is the dictionary of known words, which is loaded once and
//! never mutated, so concurrent extractions need no locking.
//!
//! # Usage
//!
//! ```ignore
//! use excerpt::{highlight_doc, SnippetConfig, WordList};
//!
//! let dict = WordList::load(Path::new("words.txt"))?;
//! let config = SnippetConfig::new(60, 30)?;
//!
//! let snippet = highlight_doc(&document, "deep dish pizza", &dict, &config);
//! // "... the best [[HIGHLIGHT]]deep dish pizza[[ENDHIGHLIGHT]] in town; ..."
//! ```

// Module declarations
mod config;
mod expand;
mod highlight;
mod scoring;
mod snippet;
mod tokenize;
mod types;
mod utils;
mod window;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use config::{
    ConfigError, SnippetConfig, DEFAULT_CLAUSE_INDICATORS, DEFAULT_MAX_WINDOW, DEFAULT_MAX_WORDS,
    DEFAULT_MIN_PRECEDING_WORDS,
};
pub use expand::{expand_query, Dictionary, EmptyDictionary, QueryTermSet, WordList, SUFFIXES};
pub use highlight::{render, render_highlighted, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use scoring::score;
pub use snippet::{extract, extract_snippet, highlight_doc};
pub use tokenize::tokenize;
pub use types::{ScoredToken, SnippetResult, SnippetWindow, Token};
pub use utils::normalize;
pub use window::select_window;
