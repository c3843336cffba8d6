//! Prefix-indexed dictionary storage.
//!
//! The dictionary is an exact-match set of words with queries that cost
//! time proportional to the key length. Decomposition probes many
//! prefixes of the same word in a row, which is exactly the access
//! pattern a trie is good at.

pub mod trie;

pub use trie::Trie;
