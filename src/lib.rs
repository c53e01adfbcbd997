//! Reverse Wordle
//!
//! You think of a word, the program guesses it. After every guess you color the
//! letters, and a strategy narrows down what your word can be. A wrong coloring
//! can be taken back at any time; the session rebuilds the strategy from the
//! corrected history.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesser::core::{Feedback, Scoring, Word};
//! use wordle_guesser::session::{Oracle, SessionConfig, SessionController};
//! use wordle_guesser::solver::StrategyFactory;
//! use wordle_guesser::wordlists::words_from_slice;
//!
//! let dictionary = words_from_slice(&["crate", "plumb", "slate", "wound"], 5);
//! let factory = StrategyFactory::Filter { dictionary: &dictionary, seed: Some(7) };
//!
//! let mut session = SessionController::new(SessionConfig::default(), || factory.build());
//! let mut oracle = Oracle::new(Word::new("plumb").unwrap(), Scoring::default());
//! let outcome = session.run(&mut oracle).unwrap();
//! assert!(outcome.is_win());
//! ```

// Core domain types
pub mod core;

// Guessing strategies
pub mod solver;

// Turn sequencing, undo and rewind
pub mod session;

// Word lists and decision trees
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
