//! Solve command
//!
//! Plays one session against a known secret, scoring automatically.

use crate::core::{Feedback, Scoring, Word};
use crate::session::{Oracle, Outcome, SessionConfig, SessionController, SessionError};
use crate::solver::StrategyFactory;

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: Word,
    pub session: SessionConfig,
    pub scoring: Scoring,
    /// Offsets the strategy seed, so repeated games differ but stay reproducible
    pub salt: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            session: SessionConfig::default(),
            scoring: Scoring::default(),
            salt: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub secret: Word,
    pub outcome: Outcome,
    /// Every scored guess, the winning one included
    pub steps: Vec<(Word, Feedback)>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_win()
    }

    /// Guesses made, counting ones later taken back
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }
}

/// Solve `config.secret` with strategies from `factory`
///
/// # Errors
/// Only `SessionError::ReplayDiverged`, which means the factory does not build
/// identical strategies.
pub fn solve_word(
    config: SolveConfig,
    factory: &StrategyFactory<'_>,
) -> Result<SolveResult, SessionError> {
    let SolveConfig {
        secret,
        session,
        scoring,
        salt,
    } = config;

    let mut controller = SessionController::new(session, || factory.build_seeded(salt));
    let mut oracle = Oracle::new(secret.clone(), scoring);
    let outcome = controller.run(&mut oracle)?;
    log::debug!("{} on {secret}: {outcome:?}", factory.name());

    Ok(SolveResult {
        secret,
        outcome,
        steps: oracle.steps().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DecisionTree;
    use crate::wordlists::words_from_slice;

    const WORDS: &[&str] = &["crate", "plumb", "slate", "irate", "grate", "wound"];

    #[test]
    fn filter_solves_a_dictionary_word() {
        let dictionary = words_from_slice(WORDS, 5);
        let factory = StrategyFactory::Filter {
            dictionary: &dictionary,
            seed: Some(42),
        };
        let config = SolveConfig::new(Word::new("grate").unwrap());

        let result = solve_word(config, &factory).unwrap();

        assert!(result.success());
        assert!(result.guesses() <= 6);
        let (last, feedback) = result.steps.last().unwrap();
        assert_eq!(last.text(), "grate");
        assert!(feedback.is_solved());
    }

    #[test]
    fn tree_follows_the_computed_feedback() {
        let tree = DecisionTree::from_json(
            r#"{"guess": "salet", "map": {"00100": "plumb", "02220": "slate"}}"#,
            5,
        )
        .unwrap();
        let factory = StrategyFactory::Tree(&tree);

        let result = solve_word(SolveConfig::new(Word::new("plumb").unwrap()), &factory).unwrap();

        assert!(result.success());
        let guesses: Vec<&str> = result.steps.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(guesses, vec!["salet", "plumb"]);
    }

    #[test]
    fn secret_outside_the_tree_is_revealed() {
        let tree = DecisionTree::from_json(r#"{"guess": "salet", "map": {}}"#, 5).unwrap();
        let factory = StrategyFactory::Tree(&tree);
        let secret = Word::new("wound").unwrap();

        let result = solve_word(SolveConfig::new(secret.clone()), &factory).unwrap();

        assert!(!result.success());
        assert_eq!(
            result.outcome,
            Outcome::Loss {
                revealed: Some(secret)
            }
        );
    }

    #[test]
    fn random_respects_the_turn_limit() {
        let dictionary = words_from_slice(WORDS, 5);
        let factory = StrategyFactory::Random {
            dictionary: &dictionary,
            seed: Some(3),
        };
        let mut config = SolveConfig::new(Word::new("zesty").unwrap());
        config.session = SessionConfig::new(5, 3);

        let result = solve_word(config, &factory).unwrap();

        assert_eq!(result.outcome, Outcome::Loss { revealed: None });
        assert_eq!(result.guesses(), 3);
    }
}
