//! Word list and decision tree loading
//!
//! Dictionaries are plain text, one word per line. Blank lines are ignored and
//! entries that are not words of the requested length are skipped.

use crate::core::Word;
use crate::solver::{DecisionTree, TreeError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for files that fail to load
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Tree { path: PathBuf, source: TreeError },
    /// The file had no usable words
    Empty { path: PathBuf, length: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Cannot read {}: {source}", path.display()),
            Self::Tree { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Empty { path, length } => {
                write!(f, "{} has no {length}-letter words", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Tree { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Load a dictionary of `length`-letter words
///
/// Duplicates are dropped, keeping the first occurrence.
///
/// # Errors
/// `LoadError::Io` if the file cannot be read, `LoadError::Empty` if nothing
/// in it is usable.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::loader::load_dictionary;
///
/// let words = load_dictionary("valid-wordle-words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content, length);
    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
            length,
        });
    }
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited words, skipping blanks, invalid entries and repeats
#[must_use]
pub fn words_from_lines(content: &str, length: usize) -> Vec<Word> {
    words_from_iter(content.lines(), length)
}

/// Convert a string slice to words of one length
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    words_from_iter(slice.iter().copied(), length)
}

fn words_from_iter<'a>(entries: impl Iterator<Item = &'a str>, length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    entries
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match Word::with_length(entry, length) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("skipping dictionary entry '{entry}': {e}");
                None
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Load a JSON decision tree for `length`-letter words
///
/// # Errors
/// `LoadError::Io` if the file cannot be read, `LoadError::Tree` if it is not
/// a valid tree.
pub fn load_tree<P: AsRef<Path>>(path: P, length: usize) -> Result<DecisionTree, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = DecisionTree::from_json(&json, length).map_err(|source| LoadError::Tree {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "loaded decision tree from {} (depth {})",
        path.display(),
        tree.depth()
    );
    Ok(tree)
}
