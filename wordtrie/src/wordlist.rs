//! Reading newline-delimited word lists.

use anyhow::{Context, Result};
use std::fs::read_to_string;
use std::path::Path;
use tracing::warn;

#[derive(Clone, Debug, Default)]
pub struct WordListOptions {
    /// Stop after this many words.
    pub max_words: Option<usize>,
    /// Skip lines longer than this many bytes.
    pub max_word_len: Option<usize>,
}

/// Read the words in `path`, one per line.
pub fn read_word_list(path: &Path, options: &WordListOptions) -> Result<Vec<String>> {
    let text = read_to_string(path)
        .with_context(|| format!("Could not read words from {}", path.display()))?;
    Ok(parse_word_list(&text, options))
}

/// Split `text` into words, one per line. Line endings (`\n` or `\r\n`)
/// are stripped but nothing else is trimmed, so a blank line is an empty
/// word.
pub fn parse_word_list(text: &str, options: &WordListOptions) -> Vec<String> {
    let mut words = Vec::new();
    for (nr, line) in text.lines().enumerate() {
        if options.max_words.is_some_and(|max| words.len() >= max) {
            break;
        }
        if let Some(max) = options.max_word_len {
            if line.len() > max {
                warn!("line {}: word longer than {} bytes, skipped", nr + 1, max);
                continue;
            }
        }
        words.push(line.to_string());
    }
    words
}
