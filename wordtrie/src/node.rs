use std::mem;

use crate::error::TrieError;
use crate::teardown::release_post_order;

/// Number of child slots per node, one for each of `a` to `z`.
pub const ALPHABET_SIZE: usize = 26;

/// Map a byte to its child slot, or None if it is not a lowercase
/// ASCII letter.
#[inline]
pub fn symbol_index(b: u8) -> Option<usize> {
    if b.is_ascii_lowercase() {
        Some((b - b'a') as usize)
    } else {
        None
    }
}

/// One vertex of the trie.
///
/// The slot array is only allocated when the node gets its first child,
/// so leaves cost no heap memory. Once allocated it always has exactly
/// `ALPHABET_SIZE` entries.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: Vec<Option<TrieNode>>,
    count: usize,
}

impl TrieNode {
    pub fn new() -> Self {
        TrieNode {
            children: Vec::new(),
            count: 0,
        }
    }

    /// Number of times a word ending at this node was inserted.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Returns the child for `symbol`, which must be a lowercase ASCII letter.
    pub fn child(&self, symbol: u8) -> Option<&TrieNode> {
        let idx = symbol_index(symbol)?;
        self.children.get(idx)?.as_ref()
    }

    /// Iterate over the present children in alphabet order, together with
    /// the letter that leads to each.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().enumerate().filter_map(|(i, slot)| {
            slot.as_ref().map(|node| ((b'a' + i as u8) as char, node))
        })
    }

    pub(crate) fn child_at(&self, idx: usize) -> Option<&TrieNode> {
        self.children.get(idx)?.as_ref()
    }

    /// Return the child at `idx`, creating it if needed.
    /// The bool is true if a new node was created.
    pub(crate) fn child_or_insert(
        &mut self,
        idx: usize,
        depth: usize,
    ) -> Result<(&mut TrieNode, bool), TrieError> {
        if self.children.is_empty() {
            let mut slots = Vec::new();
            slots
                .try_reserve_exact(ALPHABET_SIZE)
                .map_err(|_| TrieError::AllocationFailure { depth })?;
            slots.resize_with(ALPHABET_SIZE, || None);
            self.children = slots;
        }
        let slot = &mut self.children[idx];
        let created = slot.is_none();
        Ok((slot.get_or_insert_with(TrieNode::new), created))
    }

    pub(crate) fn increment(&mut self) -> usize {
        self.count += 1;
        self.count
    }

    /// Detach all children, leaving this node a leaf.
    pub(crate) fn take_children(&mut self) -> Vec<Option<TrieNode>> {
        mem::take(&mut self.children)
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Each child comes back here with an empty slot array,
        // so this never recurses more than one level.
        for child in self.take_children().into_iter().flatten() {
            release_post_order(child);
        }
    }
}
