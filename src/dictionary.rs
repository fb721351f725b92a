use home::home_dir;
use std::env::current_exe;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Word list looked for when none is given on the command line.
pub const DEFAULT_DICTIONARY: &str = "dictionary.txt";

pub const DICTIONARY_SEARCH_PATH: [&str; 3] =
    [".", "$HOME/.config/wordcount", "$EXE"];

/// Look for paths starting with $HOME or $EXE and fill in the user's
/// home directory or the wordcount executable's directory, respectively.
pub fn expand_dir(dir: &Path) -> Option<PathBuf> {
    if let Ok(path) = dir.strip_prefix("$HOME") {
        Some(home_dir()?.join(path))
    } else if let Ok(path) = dir.strip_prefix("$EXE") {
        match current_exe() {
            Ok(exe) => Some(exe.parent()?.join(path)),
            Err(_) => None,
        }
    } else {
        Some(dir.to_path_buf())
    }
}

/// Look for a word list called `filename` in the directories of
/// `search_path`, and return the first one that exists.
pub fn find_dictionary(search_path: &[&str], filename: &str) -> Option<PathBuf> {
    for dir in search_path {
        let dir = match expand_dir(Path::new(dir)) {
            Some(dir) => dir,
            None => {
                debug!("Could not expand path {}", dir);
                continue;
            }
        };

        let p = dir.join(filename);
        if p.exists() {
            debug!("Found dictionary {}", p.display());
            return Some(p);
        }
        debug!("No dictionary in {}", dir.display());
    }
    None
}
