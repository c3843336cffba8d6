//! Two-pass scan: build the dictionary, then race every word against the
//! current best.

use crate::dict::Trie;
use crate::progress::{ProgressBar, ProgressStyle};
use crate::scan::decompose::is_compound;
use crate::source::WordSource;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};

/// Summary counters for one scan of a word list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    /// Lines read from the list during the first pass.
    pub words_total: usize,
    /// Distinct words inserted into the dictionary.
    pub words_unique: usize,
    /// Trie nodes allocated for the dictionary.
    pub dict_nodes: usize,
    /// Words long enough to beat the current best and handed to the
    /// decomposer during the second pass.
    pub candidates_tested: usize,
    /// Wall-clock time for both passes, in milliseconds.
    pub elapsed_ms: u64,
}

/// Result of scanning a word list: the winning word plus counters.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    /// The longest compound word found, or the empty string when the list
    /// contains none.
    pub longest: String,
    pub stats: ScanStats,
}

/// Scan the word list at `path` and return the longest compound word
/// together with scan statistics.
///
/// The list is read twice: the first pass builds the dictionary, the
/// second decomposes each candidate against the finished dictionary.
/// Each pass opens the file independently, so the list must not change
/// in between. Open and read failures abort the scan with no partial
/// result.
///
/// Among equally long compound words, the one the second pass meets
/// first wins: a later word only replaces the best when it is strictly
/// longer.
pub fn scan(path: &Path, silent: bool) -> Result<ScanOutcome> {
    let started = Instant::now();
    let mut stats = ScanStats::default();

    // Pass 1: insert every word into a fresh dictionary. The dictionary
    // must be complete before any word is decomposed.
    let mut source = WordSource::open(path)?;
    let mut dict = Trie::new();
    while let Some(word) = source.next_word()? {
        stats.words_total += 1;
        dict.insert(&word);
    }
    stats.words_unique = dict.len();
    stats.dict_nodes = dict.node_count();

    let spinner = if silent {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("Scanning for compound words...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        Some(spinner)
    };

    // Pass 2: re-read the list and keep the longest word that decomposes.
    let mut source = WordSource::open(path)?;
    let mut longest = String::new();
    while let Some(word) = source.next_word()? {
        if word.len() > longest.len() {
            stats.candidates_tested += 1;
            if is_compound(&word, &dict) {
                longest = word;
            }
        }
    }

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    stats.elapsed_ms = started.elapsed().as_millis() as u64;
    Ok(ScanOutcome { longest, stats })
}

/// The longest compound word in the list at `path`, or the empty string
/// when no word qualifies.
pub fn longest_compound_word(path: &Path) -> Result<String> {
    Ok(scan(path, true)?.longest)
}
