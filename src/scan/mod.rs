//! Compound word detection over a frozen dictionary.
//!
//! - [`decompose`] - decides whether one word splits into two or more
//!   dictionary words
//! - [`scanner`] - drives the two-pass scan and picks the longest winner

pub mod decompose;
pub mod scanner;

pub use decompose::is_compound;
pub use scanner::{ScanOutcome, ScanStats, longest_compound_word, scan};
