//! Word lists and decision trees read from disk

pub mod loader;

pub use loader::{LoadError, load_dictionary, load_tree, words_from_lines, words_from_slice};

/// Dictionary file used when `--words` is not given
pub const DEFAULT_WORDS: &str = "valid-wordle-words.txt";

/// Decision tree file used when `--tree` is not given
pub const DEFAULT_TREE: &str = "salet.tree.hard.json";
