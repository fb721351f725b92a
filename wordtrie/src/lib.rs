#![warn(missing_debug_implementations)]

use anyhow::Result;
use std::path::Path;

mod error;
mod node;
mod teardown;
mod trie;
pub mod wordlist;

pub use crate::error::TrieError;
pub use crate::node::{symbol_index, TrieNode, ALPHABET_SIZE};
pub use crate::trie::{InsertSummary, Teardown, Trie};
pub use crate::wordlist::WordListOptions;

pub trait WordIndex {
    /// Count one more occurrence of `word`.
    /// Returns the new count for the word.
    fn add_word(&mut self, word: &str) -> Result<usize, TrieError>;

    /// Returns how many times `word` was added. Unknown words give 0.
    fn occurrences(&self, word: &str) -> usize;

    /// Load words from `path` (one word per line) and add each of them.
    /// Words the index can't handle are logged and skipped.
    /// Returns the words that were read, in file order.
    fn load_words(
        &mut self,
        path: &Path,
        options: &WordListOptions,
    ) -> Result<Vec<String>>;
}

impl WordIndex for Trie {
    fn add_word(&mut self, word: &str) -> Result<usize, TrieError> {
        self.insert(word)
    }

    fn occurrences(&self, word: &str) -> usize {
        Trie::occurrences(self, word)
    }

    fn load_words(
        &mut self,
        path: &Path,
        options: &WordListOptions,
    ) -> Result<Vec<String>> {
        let words = wordlist::read_word_list(path, options)?;
        let summary = self.insert_all(&words)?;
        for e in summary.rejected.iter() {
            tracing::warn!("Skipping word: {}", e);
        }
        tracing::debug!(
            inserted = summary.inserted,
            rejected = summary.rejected.len(),
            nodes = self.node_count(),
            "loaded {}",
            path.display()
        );
        Ok(words)
    }
}
