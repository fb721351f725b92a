use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wordtrie::{Trie, WordIndex, WordListOptions};

mod dictionary;

use crate::dictionary::{find_dictionary, DEFAULT_DICTIONARY, DICTIONARY_SEARCH_PATH};

const DEFAULT_QUERIES: [&str; 5] = ["notaword", "ucf", "no", "note", "corg"];

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Words to count in the dictionary.
    queries: Vec<String>,
    /// Word list to load, one word per line.
    #[arg(short, long)]
    dictionary: Option<PathBuf>,
    /// Stop reading the word list after this many words.
    #[arg(long)]
    max_words: Option<usize>,
    /// Skip words longer than this many bytes.
    #[arg(long)]
    max_word_len: Option<usize>,
    /// Don't print the words that were loaded.
    #[arg(short, long)]
    quiet: bool,
    #[arg(long)]
    debug: bool,
}

fn prepare_logs(is_debug: bool) {
    let level = if is_debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    prepare_logs(args.debug);

    let path = match args.dictionary {
        Some(path) => path,
        None => find_dictionary(&DICTIONARY_SEARCH_PATH, DEFAULT_DICTIONARY)
            .ok_or_else(|| anyhow!("Dictionary {} not found", DEFAULT_DICTIONARY))?,
    };
    let options = WordListOptions {
        max_words: args.max_words,
        max_word_len: args.max_word_len,
    };

    let mut trie = Trie::new();
    let words = trie.load_words(&path, &options)?;
    info!("Loaded {} words from {}", words.len(), path.display());
    if !args.quiet {
        for word in words.iter() {
            println!("{}", word);
        }
    }

    let queries: Vec<&str> = if args.queries.is_empty() {
        DEFAULT_QUERIES.to_vec()
    } else {
        args.queries.iter().map(String::as_str).collect()
    };
    for query in queries {
        println!("\t{} : {}", query, trie.occurrences(query));
    }

    let teardown = trie.destroy();
    debug!("Released {} nodes", teardown.nodes_released);
    Ok(())
}
