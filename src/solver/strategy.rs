//! Guessing strategies
//!
//! Defines the `GuessingStrategy` trait, the runtime-selectable wrapper and the
//! factory the session uses to build fresh instances when it replays history.

use super::{DecisionTree, FilterStrategy, RandomStrategy, TreeStrategy};
use crate::core::{Feedback, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// The strategy has no consistent guess left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoGuesses;

impl fmt::Display for NoGuesses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no guesses left that fit the feedback")
    }
}

impl std::error::Error for NoGuesses {}

/// Something that proposes words and learns from the feedback they earn
///
/// Strategies only move forward. Going back is done by building a new
/// instance and feeding it a shorter history.
pub trait GuessingStrategy {
    /// Ask for the word the strategy would like to submit next
    ///
    /// # Errors
    /// Returns `NoGuesses` when nothing fits the feedback seen so far.
    fn guess(&mut self) -> Result<Word, NoGuesses>;

    /// Tell the strategy what a guess earned
    fn feedback(&mut self, guess: &Word, feedback: &Feedback);

    /// Whether `guess` would currently succeed, without consuming randomness
    fn can_guess(&self) -> bool;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyKind<'a> {
    /// Walk a precomputed decision tree
    Tree(TreeStrategy<'a>),
    /// Random pick among words consistent with all feedback
    Filter(FilterStrategy<'a>),
    /// Random pick from the whole dictionary, ignoring feedback
    Random(RandomStrategy<'a>),
}

impl GuessingStrategy for StrategyKind<'_> {
    fn guess(&mut self) -> Result<Word, NoGuesses> {
        match self {
            Self::Tree(s) => s.guess(),
            Self::Filter(s) => s.guess(),
            Self::Random(s) => s.guess(),
        }
    }

    fn feedback(&mut self, guess: &Word, feedback: &Feedback) {
        match self {
            Self::Tree(s) => s.feedback(guess, feedback),
            Self::Filter(s) => s.feedback(guess, feedback),
            Self::Random(s) => s.feedback(guess, feedback),
        }
    }

    fn can_guess(&self) -> bool {
        match self {
            Self::Tree(s) => s.can_guess(),
            Self::Filter(s) => s.can_guess(),
            Self::Random(s) => s.can_guess(),
        }
    }
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StrategyName {
    /// Precomputed decision tree
    Tree,
    /// Candidate filtering
    #[default]
    Filter,
    /// Uniform random baseline
    Random,
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tree => "tree",
            Self::Filter => "filter",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

/// Builds fresh, identically configured strategy instances
///
/// With a seed, every instance draws the same random sequence, so two
/// instances fed the same history behave the same way.
#[derive(Clone, Copy)]
pub enum StrategyFactory<'a> {
    Tree(&'a DecisionTree),
    Filter {
        dictionary: &'a [Word],
        seed: Option<u64>,
    },
    Random {
        dictionary: &'a [Word],
        seed: Option<u64>,
    },
}

impl<'a> StrategyFactory<'a> {
    #[must_use]
    pub fn build(&self) -> StrategyKind<'a> {
        self.build_seeded(None)
    }

    /// Build with the configured seed offset by `salt`
    ///
    /// Used by the benchmark so that each game gets its own reproducible sequence.
    #[must_use]
    pub fn build_seeded(&self, salt: Option<u64>) -> StrategyKind<'a> {
        match *self {
            Self::Tree(tree) => StrategyKind::Tree(TreeStrategy::new(tree)),
            Self::Filter { dictionary, seed } => {
                StrategyKind::Filter(FilterStrategy::new(dictionary, rng_for(seed, salt)))
            }
            Self::Random { dictionary, seed } => {
                StrategyKind::Random(RandomStrategy::new(dictionary, rng_for(seed, salt)))
            }
        }
    }

    #[must_use]
    pub const fn name(&self) -> StrategyName {
        match self {
            Self::Tree(_) => StrategyName::Tree,
            Self::Filter { .. } => StrategyName::Filter,
            Self::Random { .. } => StrategyName::Random,
        }
    }
}

/// Seeded generator when a seed is configured, OS entropy otherwise
#[must_use]
pub fn rng_for(seed: Option<u64>, salt: Option<u64>) -> StdRng {
    match (seed, salt) {
        (Some(seed), salt) => StdRng::seed_from_u64(seed.wrapping_add(salt.unwrap_or(0))),
        (None, _) => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    fn dictionary() -> Vec<Word> {
        ["crate", "crane", "grate", "plumb", "slate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn factory_builds_the_named_variant() {
        let words = dictionary();
        let tree = DecisionTree::from_json(r#""crane""#, 5).unwrap();

        let tree_factory = StrategyFactory::Tree(&tree);
        assert!(matches!(tree_factory.build(), StrategyKind::Tree(_)));
        assert_eq!(tree_factory.name(), StrategyName::Tree);

        let filter = StrategyFactory::Filter {
            dictionary: &words,
            seed: Some(1),
        };
        assert!(matches!(filter.build(), StrategyKind::Filter(_)));

        let random = StrategyFactory::Random {
            dictionary: &words,
            seed: None,
        };
        assert!(matches!(random.build(), StrategyKind::Random(_)));
        assert_eq!(random.name().to_string(), "random");
    }

    #[test]
    fn seeded_instances_guess_identically() {
        let words = dictionary();
        let factory = StrategyFactory::Filter {
            dictionary: &words,
            seed: Some(42),
        };

        let mut first = factory.build();
        let mut second = factory.build();
        for _ in 0..10 {
            assert_eq!(first.guess(), second.guess());
        }
    }

    #[test]
    fn wrapper_delegates_feedback() {
        let words = dictionary();
        let mut strategy = StrategyFactory::Filter {
            dictionary: &words,
            seed: Some(7),
        }
        .build();

        let guess = Word::new("crate").unwrap();
        strategy.feedback(&guess, &Feedback::all(Status::NotPresent, 5));

        assert!(strategy.can_guess());
        assert_eq!(strategy.guess().unwrap().text(), "plumb");
    }

    #[test]
    fn no_guesses_displays_reason() {
        assert_eq!(NoGuesses.to_string(), "no guesses left that fit the feedback");
    }
}
