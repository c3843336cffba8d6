//! # LCW - Longest Compound Word Finder
//!
//! LCW scans a newline-delimited word list and reports the longest word
//! that can be fully decomposed into two or more other words from the
//! same list.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`dict`] - Prefix-indexed dictionary storage (byte-level radix trie)
//! - [`scan`] - Compound decomposition and the two-pass scanner
//! - [`source`] - Line-oriented word list reading
//! - [`output`] - Result and statistics formatting
//! - [`progress`] - Spinner shim (no-op without the `progress` feature)
//!
//! ## Quick Start
//!
//! ```ignore
//! use lcw::scan::longest_compound_word;
//! use std::path::Path;
//!
//! let word = longest_compound_word(Path::new("word.list")).unwrap();
//! println!("{}", word);
//! ```
//!
//! ## How it works
//!
//! The scanner makes two passes over the list:
//!
//! 1. **Build** - every word is inserted into a radix trie, so membership
//!    queries cost time proportional to the key length rather than to the
//!    dictionary size.
//! 2. **Scan** - every word longer than the current best is handed to the
//!    decomposer, which recursively splits it against the finished trie.

pub mod dict;
pub mod output;
pub mod progress;
pub mod scan;
pub mod source;
