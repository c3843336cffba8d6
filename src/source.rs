//! Line-oriented word list reading.
//!
//! A word list is plain newline-delimited text. Each line becomes one
//! word after trailing newline and space bytes are stripped; no other
//! normalization happens, so case and interior whitespace survive.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Streaming reader over one pass of a word list file.
///
/// The scanner opens a fresh `WordSource` for each of its two passes, so
/// the type holds no rewind state.
#[derive(Debug)]
pub struct WordSource {
    reader: BufReader<File>,
    path: PathBuf,
    buf: Vec<u8>,
}

impl WordSource {
    /// Open `path` for a pass over its words.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open word list: {}", path.display()))?;
        Ok(Self {
            reader: BufReader::new(file),
            path: path.to_path_buf(),
            buf: Vec::new(),
        })
    }

    /// The next word, or `None` once the list is exhausted.
    ///
    /// A final line without a trailing newline still counts as a word.
    /// Lines are decoded lossily, so a list with stray non-UTF-8 bytes
    /// degrades to replacement characters instead of failing.
    pub fn next_word(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .with_context(|| format!("read error in word list: {}", self.path.display()))?;
        if n == 0 {
            return Ok(None);
        }

        let mut end = self.buf.len();
        while end > 0 && (self.buf[end - 1] == b'\n' || self.buf[end - 1] == b' ') {
            end -= 1;
        }
        Ok(Some(String::from_utf8_lossy(&self.buf[..end]).into_owned()))
    }
}
