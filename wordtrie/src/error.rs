use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The word contains a byte outside `a`-`z`. Nodes for the valid
    /// prefix before `position` stay in the trie.
    #[error("invalid character {found:?} at position {position} in word {word:?}")]
    InvalidCharacter {
        word: String,
        position: usize,
        found: char,
    },
    /// Reserving child slots for a node at `depth` failed.
    #[error("could not allocate child slots for a node at depth {depth}")]
    AllocationFailure { depth: usize },
}
