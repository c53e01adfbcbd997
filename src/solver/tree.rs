//! Decision-tree strategy
//!
//! A decision tree maps every feedback key to the next guess. The JSON layout is
//! the one produced by common Wordle tree generators: a node is either a bare word
//! or `{"guess": word, "map": {key: node, ...}}` (`children` is accepted as well).

use super::{GuessingStrategy, NoGuesses};
use crate::core::{Feedback, Status, Word, WordError};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fmt;

/// A node of a validated decision tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Forced guess with nowhere to go afterwards
    Leaf(Word),
    /// Guess plus the subtree for every feedback key that can follow it
    Branch {
        guess: Word,
        children: FxHashMap<String, TreeNode>,
    },
    /// Absorbing node reached after an unknown key
    Dead,
}

static DEAD: TreeNode = TreeNode::Dead;

impl TreeNode {
    /// The word this node wants to play
    #[must_use]
    pub const fn guess(&self) -> Option<&Word> {
        match self {
            Self::Leaf(word) | Self::Branch { guess: word, .. } => Some(word),
            Self::Dead => None,
        }
    }

    /// The child for a feedback key, if there is one
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Branch { children, .. } => children.get(key),
            Self::Leaf(_) | Self::Dead => None,
        }
    }

    /// Number of guesses along the longest path
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Dead => 0,
            Self::Leaf(_) => 1,
            Self::Branch { children, .. } => {
                1 + children.values().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Node as it appears in the JSON file
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNode {
    Word(String),
    Branch {
        guess: String,
        #[serde(alias = "children", default)]
        map: FxHashMap<String, RawNode>,
    },
    Other(serde_json::Map<String, serde_json::Value>),
}

/// Error type for decision trees that fail to load
#[derive(Debug)]
pub enum TreeError {
    Json(serde_json::Error),
    InvalidWord { word: String, source: WordError },
    InvalidKey { key: String, length: usize },
    /// An object that is neither `{}` nor a guess with its children
    MalformedNode(String),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "Malformed decision tree: {e}"),
            Self::InvalidWord { word, source } => {
                write!(f, "Decision tree word '{word}' is invalid: {source}")
            }
            Self::InvalidKey { key, length } => write!(
                f,
                "Decision tree key '{key}' must be {length} symbols drawn from 0, 1 and 2"
            ),
            Self::MalformedNode(node) => {
                write!(f, "Decision tree node {node} needs a string \"guess\"")
            }
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
            Self::InvalidKey { .. } | Self::MalformedNode(_) => None,
        }
    }
}

impl From<serde_json::Error> for TreeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// A validated decision tree for one word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    root: TreeNode,
    word_length: usize,
}

impl DecisionTree {
    /// Parse and validate a JSON decision tree
    ///
    /// # Errors
    /// Returns `TreeError` if the JSON is malformed, an object other than `{}`
    /// lacks a string `guess`, a word is not `word_length` letters, or a key is
    /// not `word_length` symbols from `0`, `1`, `2`.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::solver::DecisionTree;
    ///
    /// let tree = DecisionTree::from_json(
    ///     r#"{"guess": "salet", "map": {"00000": "courd", "22222": "salet"}}"#,
    ///     5,
    /// ).unwrap();
    /// assert_eq!(tree.depth(), 2);
    /// ```
    pub fn from_json(json: &str, word_length: usize) -> Result<Self, TreeError> {
        let raw: RawNode = serde_json::from_str(json)?;
        let root = Self::validate(raw, word_length)?;
        Ok(Self { root, word_length })
    }

    fn validate(raw: RawNode, word_length: usize) -> Result<TreeNode, TreeError> {
        let word = |text: String| {
            Word::with_length(text.as_str(), word_length)
                .map_err(|source| TreeError::InvalidWord { word: text, source })
        };

        match raw {
            RawNode::Word(text) => Ok(TreeNode::Leaf(word(text)?)),
            RawNode::Branch { guess, map } => {
                let guess = word(guess)?;
                let mut children = FxHashMap::default();
                children.reserve(map.len());
                for (key, child) in map {
                    let valid = key.chars().count() == word_length
                        && key.chars().all(|c| Status::from_code(c).is_some());
                    if !valid {
                        return Err(TreeError::InvalidKey {
                            key,
                            length: word_length,
                        });
                    }
                    children.insert(key, Self::validate(child, word_length)?);
                }
                Ok(TreeNode::Branch { guess, children })
            }
            RawNode::Other(object) if object.is_empty() => Ok(TreeNode::Dead),
            RawNode::Other(object) => Err(TreeError::MalformedNode(
                serde_json::Value::Object(object).to_string(),
            )),
        }
    }

    #[must_use]
    pub const fn root(&self) -> &TreeNode {
        &self.root
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of guesses along the longest path
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

/// Walks a decision tree one feedback key at a time
pub struct TreeStrategy<'a> {
    current: &'a TreeNode,
    depth: usize,
}

impl<'a> TreeStrategy<'a> {
    #[must_use]
    pub const fn new(tree: &'a DecisionTree) -> Self {
        Self {
            current: &tree.root,
            depth: 0,
        }
    }

    /// The node the next guess comes from
    #[must_use]
    pub const fn node(&self) -> &'a TreeNode {
        self.current
    }

    /// Number of feedback keys followed so far
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub const fn is_dead(&self) -> bool {
        matches!(self.current, TreeNode::Dead)
    }
}

impl GuessingStrategy for TreeStrategy<'_> {
    fn guess(&mut self) -> Result<Word, NoGuesses> {
        self.current.guess().cloned().ok_or(NoGuesses)
    }

    fn feedback(&mut self, guess: &Word, feedback: &Feedback) {
        let key = feedback.key();
        if let Some(child) = self.current.child(&key) {
            self.current = child;
            self.depth += 1;
            log::debug!("tree: {guess} {key} -> depth {}", self.depth);
        } else {
            if !self.is_dead() {
                log::warn!("tree has no branch for {guess} {key}");
            }
            self.current = &DEAD;
        }
    }

    fn can_guess(&self) -> bool {
        !self.is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = r#"{
        "guess": "salet",
        "map": {
            "00000": {
                "guess": "courd",
                "map": {
                    "22222": "courd",
                    "02000": "might"
                }
            },
            "22222": "salet",
            "10000": {"guess": "brash", "children": {"00222": "crash"}}
        }
    }"#;

    fn tree() -> DecisionTree {
        DecisionTree::from_json(TREE, 5).unwrap()
    }

    fn key(k: &str) -> Feedback {
        Feedback::from_key(k).unwrap()
    }

    fn word(w: &str) -> Word {
        Word::new(w).unwrap()
    }

    #[test]
    fn parses_nested_tree() {
        let tree = tree();
        assert_eq!(tree.word_length(), 5);
        assert_eq!(tree.root().guess().map(Word::text), Some("salet"));
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn rejects_bad_trees() {
        assert!(matches!(
            DecisionTree::from_json("42", 5),
            Err(TreeError::Json(_))
        ));
        assert!(matches!(
            DecisionTree::from_json(r#""cranes""#, 5),
            Err(TreeError::InvalidWord { .. })
        ));
        assert!(matches!(
            DecisionTree::from_json(r#"{"guess": "salet", "map": {"0003": "crane"}}"#, 5),
            Err(TreeError::InvalidKey { .. })
        ));
        assert!(matches!(
            DecisionTree::from_json(r#"{"guess": "salet", "map": {"00030": "crane"}}"#, 5),
            Err(TreeError::InvalidKey { .. })
        ));
    }

    #[test]
    fn rejects_objects_without_a_guess() {
        for json in [
            r#"{"gues": "salet", "map": {"00000": "courd"}}"#,
            r#"{"guess": 5, "map": {}}"#,
            r#"{"map": {"00000": "courd"}}"#,
            r#"{"guess": "salet", "map": {"00000": {"guess": ["courd"]}}}"#,
        ] {
            assert!(
                matches!(
                    DecisionTree::from_json(json, 5),
                    Err(TreeError::MalformedNode(_))
                ),
                "{json}"
            );
        }
    }

    #[test]
    fn empty_object_is_dead() {
        let tree = DecisionTree::from_json("{}", 5).unwrap();
        assert_eq!(tree.root(), &TreeNode::Dead);
        let mut strategy = TreeStrategy::new(&tree);
        assert_eq!(strategy.guess(), Err(NoGuesses));
        assert!(!strategy.can_guess());
    }

    #[test]
    fn guess_then_descend() {
        let tree = tree();
        let mut strategy = TreeStrategy::new(&tree);

        assert_eq!(strategy.guess().unwrap().text(), "salet");
        strategy.feedback(&word("salet"), &key("00000"));
        assert_eq!(strategy.depth(), 1);
        assert_eq!(strategy.guess().unwrap().text(), "courd");
        strategy.feedback(&word("courd"), &key("02000"));
        assert_eq!(strategy.depth(), 2);
        assert_eq!(strategy.guess().unwrap().text(), "might");
    }

    #[test]
    fn children_alias_is_accepted() {
        let tree = tree();
        let mut strategy = TreeStrategy::new(&tree);
        strategy.feedback(&word("salet"), &key("10000"));
        assert_eq!(strategy.guess().unwrap().text(), "brash");
        strategy.feedback(&word("brash"), &key("00222"));
        assert_eq!(strategy.guess().unwrap().text(), "crash");
    }

    #[test]
    fn unknown_key_is_absorbing() {
        let tree = tree();
        let mut strategy = TreeStrategy::new(&tree);

        strategy.feedback(&word("salet"), &key("12121"));
        assert!(strategy.is_dead());
        assert_eq!(strategy.guess(), Err(NoGuesses));

        for _ in 0..3 {
            strategy.feedback(&word("salet"), &key("00000"));
            assert!(strategy.is_dead());
        }
        assert_eq!(strategy.depth(), 0);
    }

    #[test]
    fn leaf_has_no_children() {
        let tree = tree();
        let mut strategy = TreeStrategy::new(&tree);
        strategy.feedback(&word("salet"), &key("22222"));
        assert_eq!(strategy.guess().unwrap().text(), "salet");

        strategy.feedback(&word("salet"), &key("22222"));
        assert!(strategy.is_dead());
    }

    #[test]
    fn transitions_are_deterministic() {
        let tree = tree();
        let mut first = TreeStrategy::new(&tree);
        let mut second = TreeStrategy::new(&tree);

        for k in ["00000", "22222"] {
            first.feedback(&word("salet"), &key(k));
            second.feedback(&word("salet"), &key(k));
            assert!(std::ptr::eq(first.node(), second.node()));
        }
    }

    #[test]
    fn unknown_status_never_matches() {
        let tree = tree();
        let mut strategy = TreeStrategy::new(&tree);
        let feedback = Feedback::all(Status::Unknown, 5);
        strategy.feedback(&word("salet"), &feedback);
        assert!(strategy.is_dead());
    }
}
