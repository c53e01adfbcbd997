//! The human side of a session
//!
//! The collaborator knows the secret word. It scores guesses, may ask to take
//! the last score back, and picks a rewind point when the strategy runs dry.

use super::{Outcome, SessionError};
use crate::core::{Feedback, Word};

/// A guess waiting to be scored
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    /// Zero-based turn
    pub turn: usize,
    pub max_turns: usize,
    pub guess: &'a Word,
    /// Starting point for editing: blank for a new guess, the old score when correcting
    pub initial: &'a Feedback,
    /// The guess is being shown again after an undo or rewind
    pub correcting: bool,
    pub can_undo: bool,
    /// Undos and rewinds so far
    pub rewinds: usize,
}

/// Answer to a [`Prompt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Feedback(Feedback),
    /// Take back the previous score
    Undo,
    Quit,
}

/// Answer when the strategy has nothing left to guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewindReply {
    /// Re-score this 1-based turn and play on from there
    Turn(usize),
    /// Give up and tell the word
    Reveal(String),
}

pub trait Collaborator {
    /// Score a guess
    fn feedback(&mut self, prompt: &Prompt<'_>) -> Reply;

    /// Choose where to go back to after the strategy ran out of guesses
    fn rewind(&mut self, history: &[(Word, Feedback)]) -> RewindReply;

    /// A scored guess was accepted into the history
    fn recorded(&mut self, _turn: usize, _guess: &Word, _feedback: &Feedback) {}

    /// A reply could not be applied; the same guess will be asked again
    fn rejected(&mut self, _error: &SessionError) {}

    fn finished(&mut self, _outcome: &Outcome) {}
}
