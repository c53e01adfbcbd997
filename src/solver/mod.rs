//! Guessing strategies
//!
//! A decision-tree walker, a candidate filter and a random baseline, all behind
//! the `GuessingStrategy` trait.

pub mod filter;
pub mod random;
pub mod strategy;
pub mod tree;

pub use filter::FilterStrategy;
pub use random::RandomStrategy;
pub use strategy::{
    GuessingStrategy, NoGuesses, StrategyFactory, StrategyKind, StrategyName, rng_for,
};
pub use tree::{DecisionTree, TreeError, TreeNode, TreeStrategy};
