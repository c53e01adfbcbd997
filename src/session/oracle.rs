//! Collaborator that knows the secret and scores automatically

use super::{Collaborator, Prompt, Reply, RewindReply};
use crate::core::{Feedback, Scoring, Word};

/// Scores every guess against a fixed secret
///
/// Used by `solve` and `benchmark`. When the strategy runs dry it reveals the
/// secret, ending the session as a loss.
#[derive(Debug, Clone)]
pub struct Oracle {
    secret: Word,
    scoring: Scoring,
    steps: Vec<(Word, Feedback)>,
}

impl Oracle {
    #[must_use]
    pub const fn new(secret: Word, scoring: Scoring) -> Self {
        Self {
            secret,
            scoring,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Every scored guess in play order, including the winning one
    #[must_use]
    pub fn steps(&self) -> &[(Word, Feedback)] {
        &self.steps
    }
}

impl Collaborator for Oracle {
    fn feedback(&mut self, prompt: &Prompt<'_>) -> Reply {
        Reply::Feedback(Feedback::calculate_with(
            self.scoring,
            prompt.guess,
            &self.secret,
        ))
    }

    fn rewind(&mut self, _history: &[(Word, Feedback)]) -> RewindReply {
        RewindReply::Reveal(self.secret.text().to_string())
    }

    fn recorded(&mut self, _turn: usize, guess: &Word, feedback: &Feedback) {
        self.steps.push((guess.clone(), feedback.clone()));
    }
}
