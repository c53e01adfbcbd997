//! Feedback calculation and representation
//!
//! Feedback is the row of colored tiles a guess earns against the secret word.
//! It encodes to a key of one digit per letter, used to index decision trees:
//! - 0 = not present
//! - 1 = present elsewhere
//! - 2 = placed

use super::{Status, Word};
use std::fmt;

/// Rule used to score a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Scoring {
    /// One left-to-right pass; an earlier `Present` can use up the letter a
    /// later exact match needed
    #[default]
    SinglePass,
    /// Exact matches claim their letters first, then presents from what remains
    PlacedFirst,
}

/// Verdicts for every letter of a guess, aligned by position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Status>);

impl Feedback {
    #[must_use]
    pub const fn new(statuses: Vec<Status>) -> Self {
        Self(statuses)
    }

    /// Feedback of `len` identical verdicts
    #[must_use]
    pub fn all(status: Status, len: usize) -> Self {
        Self(vec![status; len])
    }

    /// Score `guess` against `secret` with the default single-pass rule
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Feedback, Word};
    ///
    /// let guess = Word::new("close").unwrap();
    /// let secret = Word::new("weary").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &secret).key(), "00001");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        Self::calculate_with(Scoring::SinglePass, guess, secret)
    }

    #[must_use]
    pub fn calculate_with(scoring: Scoring, guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");
        match scoring {
            Scoring::SinglePass => Self::single_pass(guess, secret),
            Scoring::PlacedFirst => Self::placed_first(guess, secret),
        }
    }

    fn single_pass(guess: &Word, secret: &Word) -> Self {
        let mut letters_left = secret.char_counts();

        let statuses = guess
            .chars()
            .iter()
            .zip(secret.chars())
            .map(|(&guessed, &real)| match letters_left.get_mut(&guessed) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    if guessed == real {
                        Status::Placed
                    } else {
                        Status::Present
                    }
                }
                _ => Status::NotPresent,
            })
            .collect();

        Self(statuses)
    }

    fn placed_first(guess: &Word, secret: &Word) -> Self {
        let mut statuses = vec![Status::NotPresent; guess.len()];
        let mut letters_left = secret.char_counts();

        // First pass: exact matches
        for (i, (&guessed, &real)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if guessed == real {
                statuses[i] = Status::Placed;
                if let Some(count) = letters_left.get_mut(&guessed) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: presents from the leftover letters
        for (i, &guessed) in guess.chars().iter().enumerate() {
            if statuses[i] == Status::Placed {
                continue;
            }
            if let Some(count) = letters_left.get_mut(&guessed).filter(|c| **c > 0) {
                statuses[i] = Status::Present;
                *count -= 1;
            }
        }

        Self(statuses)
    }

    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All letters placed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == Status::Placed)
    }

    /// Right length and no `Unknown` verdicts
    #[must_use]
    pub fn is_well_formed(&self, length: usize) -> bool {
        self.0.len() == length && !self.0.contains(&Status::Unknown)
    }

    /// Encode as a decision-tree key
    ///
    /// `Unknown` encodes as `?`, which no tree key contains.
    #[must_use]
    pub fn key(&self) -> String {
        self.0.iter().map(|s| s.code().unwrap_or('?')).collect()
    }

    /// Decode a decision-tree key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        key.chars()
            .map(Status::from_code)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Parse feedback typed by a human, like "GY-GY", "21020" or "🟩🟨⬛🟩🟨"
    ///
    /// The length is not checked here; the session rejects rows of the wrong length.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let statuses = input
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Status::from_symbol)
            .collect::<Option<Vec<_>>>()?;

        if statuses.is_empty() {
            None
        } else {
            Some(Self(statuses))
        }
    }

    /// Convert to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
