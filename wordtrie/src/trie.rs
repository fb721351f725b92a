use fnv::FnvHashMap;
use tracing::trace;

use crate::error::TrieError;
use crate::node::{symbol_index, TrieNode};
use crate::teardown::release_post_order;

/// A prefix tree over the letters `a` to `z` that counts how often each
/// word was inserted.
#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
    words: usize,
    nodes: usize,
}

/// Result of `Trie::insert_all`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InsertSummary {
    pub inserted: usize,
    pub rejected: Vec<TrieError>,
}

/// What was released by `Trie::destroy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Teardown {
    pub nodes_released: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            words: 0,
            nodes: 1,
        }
    }

    /// Count one more occurrence of `word` and return its new count.
    ///
    /// Fails on the first byte that is not a lowercase ASCII letter.
    /// Nodes already created for the letters before it are kept.
    pub fn insert(&mut self, word: &str) -> Result<usize, TrieError> {
        let mut ptr = &mut self.root;
        for (pos, b) in word.bytes().enumerate() {
            let idx = symbol_index(b).ok_or_else(|| invalid(word, pos))?;
            let (next, created) = ptr.child_or_insert(idx, pos)?;
            if created {
                self.nodes += 1;
            }
            ptr = next;
        }
        self.words += 1;
        let count = ptr.increment();
        trace!(word, count, "inserted");
        Ok(count)
    }

    /// Insert every word in `words`. Words with invalid characters are
    /// collected in the summary and do not stop the rest. Running out of
    /// memory does stop it.
    pub fn insert_all<I, T>(&mut self, words: I) -> Result<InsertSummary, TrieError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut summary = InsertSummary::default();
        for word in words {
            match self.insert(word.as_ref()) {
                Ok(_) => summary.inserted += 1,
                Err(e @ TrieError::InvalidCharacter { .. }) => {
                    summary.rejected.push(e)
                }
                Err(e) => return Err(e),
            }
        }
        Ok(summary)
    }

    /// Returns how many times `word` was inserted. Words that were never
    /// inserted, including any with characters outside `a`-`z`, give 0.
    pub fn occurrences(&self, word: &str) -> usize {
        self.find(word).map_or(0, TrieNode::count)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.occurrences(word) > 0
    }

    /// Look up all of `queries` at once.
    pub fn occurrences_of<'a, I>(&self, queries: I) -> FnvHashMap<&'a str, usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        queries
            .into_iter()
            .map(|q| (q, self.occurrences(q)))
            .collect()
    }

    fn find(&self, word: &str) -> Option<&TrieNode> {
        let mut ptr = &self.root;
        for b in word.bytes() {
            ptr = ptr.child_at(symbol_index(b)?)?;
        }
        Some(ptr)
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Total number of successful insertions.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of nodes in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Release every node, children before parents, and consume the trie.
    pub fn destroy(self) -> Teardown {
        let nodes_released = release_post_order(self.into_root());
        Teardown { nodes_released }
    }

    pub(crate) fn into_root(self) -> TrieNode {
        self.root
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

fn invalid(word: &str, position: usize) -> TrieError {
    // Everything before `position` is ASCII, so it is a char boundary.
    let found = word[position..].chars().next().unwrap_or('\0');
    TrieError::InvalidCharacter {
        word: word.to_string(),
        position,
        found,
    }
}
