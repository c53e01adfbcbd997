//! Uniform random baseline
//!
//! Picks any dictionary word, ignoring feedback. Useful as a floor when
//! benchmarking the other strategies.

use super::{GuessingStrategy, NoGuesses};
use crate::core::{Feedback, Word};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

pub struct RandomStrategy<'a> {
    words: &'a [Word],
    rng: StdRng,
}

impl<'a> RandomStrategy<'a> {
    #[must_use]
    pub const fn new(words: &'a [Word], rng: StdRng) -> Self {
        Self { words, rng }
    }
}

impl GuessingStrategy for RandomStrategy<'_> {
    fn guess(&mut self) -> Result<Word, NoGuesses> {
        self.words.choose(&mut self.rng).cloned().ok_or(NoGuesses)
    }

    fn feedback(&mut self, _guess: &Word, _feedback: &Feedback) {}

    fn can_guess(&self) -> bool {
        !self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::solver::rng_for;

    #[test]
    fn guesses_come_from_the_dictionary() {
        let words: Vec<Word> = ["crane", "slate", "irate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let mut strategy = RandomStrategy::new(&words, rng_for(Some(9), None));

        for _ in 0..20 {
            let guess = strategy.guess().unwrap();
            assert!(words.contains(&guess));
        }
    }

    #[test]
    fn feedback_is_ignored() {
        let words = vec![Word::new("crane").unwrap()];
        let mut strategy = RandomStrategy::new(&words, rng_for(Some(9), None));

        strategy.feedback(&words[0], &Feedback::all(Status::NotPresent, 5));
        assert_eq!(strategy.guess().unwrap().text(), "crane");
    }

    #[test]
    fn empty_dictionary_has_no_guesses() {
        let mut strategy = RandomStrategy::new(&[], rng_for(Some(9), None));
        assert!(!strategy.can_guess());
        assert_eq!(strategy.guess(), Err(NoGuesses));
    }
}
