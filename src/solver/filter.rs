//! Candidate-filtering strategy
//!
//! Keeps every dictionary word that is still consistent with all feedback and
//! guesses one of them at random.

use super::{GuessingStrategy, NoGuesses};
use crate::core::{Feedback, Status, Word};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;

/// Random guesses from a shrinking candidate set
pub struct FilterStrategy<'a> {
    candidates: Vec<&'a Word>,
    rng: StdRng,
}

impl<'a> FilterStrategy<'a> {
    /// Start with the whole dictionary as candidates
    #[must_use]
    pub fn new(dictionary: &'a [Word], rng: StdRng) -> Self {
        Self {
            candidates: dictionary.iter().collect(),
            rng,
        }
    }

    /// Words still consistent with all feedback
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }
}

impl GuessingStrategy for FilterStrategy<'_> {
    fn guess(&mut self) -> Result<Word, NoGuesses> {
        self.candidates
            .choose(&mut self.rng)
            .map(|&word| word.clone())
            .ok_or(NoGuesses)
    }

    fn feedback(&mut self, guess: &Word, feedback: &Feedback) {
        let before = self.candidates.len();
        let need = confirmed_counts(guess, feedback);

        self.candidates.retain(|word| {
            placed_letters_match(word, guess, feedback)
                && present_letters_elsewhere(word, guess, feedback)
                && absent_letters_not_here(word, guess, feedback)
                && letter_counts_exact(word, &need)
        });

        log::debug!(
            "filter: {guess} {feedback} kept {} of {before} candidates",
            self.candidates.len()
        );
    }

    fn can_guess(&self) -> bool {
        !self.candidates.is_empty()
    }
}

/// Whether `word` could be the secret given one guess and its feedback
#[must_use]
pub fn is_consistent(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    placed_letters_match(word, guess, feedback)
        && present_letters_elsewhere(word, guess, feedback)
        && absent_letters_not_here(word, guess, feedback)
        && letter_counts_exact(word, &confirmed_counts(guess, feedback))
}

/// Letters of `guess` at positions with `status`, with the letter `word` has there
fn positions_with<'w>(
    word: &'w Word,
    guess: &'w Word,
    feedback: &'w Feedback,
    status: Status,
) -> impl Iterator<Item = (u8, u8)> + 'w {
    word.chars()
        .iter()
        .zip(guess.chars())
        .zip(feedback.statuses())
        .filter(move |&(_, &s)| s == status)
        .map(|((&w, &g), _)| (w, g))
}

fn placed_letters_match(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    positions_with(word, guess, feedback, Status::Placed).all(|(w, g)| w == g)
}

fn present_letters_elsewhere(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    positions_with(word, guess, feedback, Status::Present).all(|(w, g)| w != g)
}

// Positional only: the letter may still occur elsewhere, the count check decides that.
fn absent_letters_not_here(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    positions_with(word, guess, feedback, Status::NotPresent).all(|(w, g)| w != g)
}

/// How many times each guessed letter is confirmed by `Placed` or `Present`
///
/// Letters that were only ever `NotPresent` map to zero.
fn confirmed_counts(guess: &Word, feedback: &Feedback) -> FxHashMap<u8, usize> {
    let mut need = FxHashMap::default();
    for (&letter, &status) in guess.chars().iter().zip(feedback.statuses()) {
        let count = need.entry(letter).or_insert(0);
        if status.confirms_letter() {
            *count += 1;
        }
    }
    need
}

fn letter_counts_exact(word: &Word, need: &FxHashMap<u8, usize>) -> bool {
    need.iter()
        .all(|(&letter, &count)| word.count_of(letter) == count)
}
