//! Turn sequencing
//!
//! The session owns the guess/feedback history and the active strategy. Taking a
//! score back never mutates the strategy in reverse: a fresh instance is built and
//! the shorter history is replayed into it.

pub mod collaborator;
pub mod oracle;

pub use collaborator::{Collaborator, Prompt, Reply, RewindReply};
pub use oracle::Oracle;

use crate::core::{Feedback, Status, Word};
use crate::solver::{GuessingStrategy, NoGuesses};
use std::fmt;

/// Limits for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub word_length: usize,
    pub max_turns: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_turns: usize) -> Self {
        Self {
            word_length,
            max_turns,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(5, 6)
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every letter placed; `turns` counts the winning guess
    Win { guess: Word, turns: usize },
    /// Out of turns, or the collaborator told the word
    Loss { revealed: Option<Word> },
    Abort { reason: AbortReason },
}

impl Outcome {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// Rewind input that is neither a recorded turn nor a word
    InvalidRewind(String),
    Quit,
}

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The strategy has no guess; the caller must rewind or end the session
    Exhausted,
    MalformedFeedback { expected: usize, actual: usize },
    UnknownStatus,
    NoPendingGuess,
    NothingToUndo,
    InvalidTurn { turn: usize, available: usize },
    /// Replaying accepted history did not reproduce a usable strategy
    ReplayDiverged { turn: usize },
    Finished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "the strategy has run out of guesses"),
            Self::MalformedFeedback { expected, actual } => {
                write!(f, "feedback must have {expected} letters, got {actual}")
            }
            Self::UnknownStatus => write!(f, "feedback has letters without a verdict"),
            Self::NoPendingGuess => write!(f, "there is no guess waiting for feedback"),
            Self::NothingToUndo => write!(f, "nothing to undo"),
            Self::InvalidTurn { turn, available } => {
                write!(f, "turn {turn} is not between 1 and {available}")
            }
            Self::ReplayDiverged { turn } => write!(
                f,
                "replaying history ran out of guesses before turn {turn}, which was accepted before"
            ),
            Self::Finished => write!(f, "the session is over"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<NoGuesses> for SessionError {
    fn from(_: NoGuesses) -> Self {
        Self::Exhausted
    }
}

/// Guess handed out and not scored yet
#[derive(Debug, Clone)]
struct Pending {
    guess: Word,
    initial: Feedback,
    correcting: bool,
}

/// Drives a session: asks the strategy, records feedback, rewinds on request
///
/// `factory` must build identical strategies every time it is called; undo and
/// rewind depend on it.
pub struct SessionController<S, F> {
    factory: F,
    strategy: S,
    config: SessionConfig,
    history: Vec<(Word, Feedback)>,
    pending: Option<Pending>,
    rewinds: usize,
    outcome: Option<Outcome>,
}

impl<S, F> SessionController<S, F>
where
    S: GuessingStrategy,
    F: Fn() -> S,
{
    pub fn new(config: SessionConfig, factory: F) -> Self {
        let strategy = factory();
        Self {
            factory,
            strategy,
            config,
            history: Vec::new(),
            pending: None,
            rewinds: 0,
            outcome: None,
        }
    }

    /// Accepted guesses and their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Zero-based index of the turn being played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Undos and rewinds performed so far
    #[must_use]
    pub const fn rewinds(&self) -> usize {
        self.rewinds
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The current guess is an earlier one shown again for correction
    #[must_use]
    pub fn is_correcting(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.correcting)
    }

    /// Guess for the current turn
    ///
    /// Asking twice without submitting returns the same guess.
    ///
    /// # Errors
    /// `SessionError::Exhausted` when the strategy has nothing left, or
    /// `SessionError::Finished` after the session ended.
    pub fn next_guess(&mut self) -> Result<Word, SessionError> {
        self.ensure_running()?;
        if let Some(pending) = &self.pending {
            return Ok(pending.guess.clone());
        }

        let guess = self.strategy.guess()?;
        log::debug!("turn {}: guessing {guess}", self.turn() + 1);
        self.pending = Some(Pending {
            guess: guess.clone(),
            initial: Feedback::all(Status::NotPresent, self.config.word_length),
            correcting: false,
        });
        Ok(guess)
    }

    /// Score the pending guess
    ///
    /// Returns the outcome when this ends the session. Malformed feedback is
    /// rejected without changing anything.
    ///
    /// # Errors
    /// `MalformedFeedback` or `UnknownStatus` for bad feedback, `NoPendingGuess`
    /// when `next_guess` was not called, `Finished` after the session ended.
    pub fn submit(&mut self, feedback: Feedback) -> Result<Option<Outcome>, SessionError> {
        self.ensure_running()?;
        if self.pending.is_none() {
            return Err(SessionError::NoPendingGuess);
        }
        self.validate(&feedback)?;
        let Some(Pending { guess, .. }) = self.pending.take() else {
            return Err(SessionError::NoPendingGuess);
        };

        if feedback.is_solved() {
            let turns = self.turn() + 1;
            log::info!("solved: {guess} in {turns} turns");
            return Ok(Some(self.finish(Outcome::Win { guess, turns })));
        }

        self.strategy.feedback(&guess, &feedback);
        self.history.push((guess, feedback));

        if self.turn() >= self.config.max_turns {
            log::info!("out of turns after {}", self.turn());
            return Ok(Some(self.finish(Outcome::Loss { revealed: None })));
        }
        Ok(None)
    }

    /// Take back the last accepted feedback and show that guess again
    ///
    /// # Errors
    /// `NothingToUndo` on an empty history, `ReplayDiverged` if the rebuilt
    /// strategy cannot reproduce the kept history.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        self.ensure_running()?;
        let last = self
            .history
            .len()
            .checked_sub(1)
            .ok_or(SessionError::NothingToUndo)?;
        self.reopen(last)
    }

    /// Go back to a 1-based turn and show its guess again
    ///
    /// # Errors
    /// `InvalidTurn` unless `1 <= turn <= history length`, `ReplayDiverged` if
    /// the rebuilt strategy cannot reproduce the kept history.
    pub fn rewind_to(&mut self, turn: usize) -> Result<(), SessionError> {
        self.ensure_running()?;
        let available = self.history.len();
        if turn == 0 || turn > available {
            return Err(SessionError::InvalidTurn { turn, available });
        }
        self.reopen(turn - 1)
    }

    /// End the session with the word the collaborator reveals
    ///
    /// Text that is not a word of the session's length aborts instead.
    pub fn reveal(&mut self, text: &str) -> Outcome {
        let outcome = match Word::with_length(text.trim(), self.config.word_length) {
            Ok(word) => Outcome::Loss {
                revealed: Some(word),
            },
            Err(e) => {
                log::warn!("rewind input '{text}' rejected: {e}");
                Outcome::Abort {
                    reason: AbortReason::InvalidRewind(text.to_string()),
                }
            }
        };
        self.finish(outcome)
    }

    pub fn quit(&mut self) -> Outcome {
        self.finish(Outcome::Abort {
            reason: AbortReason::Quit,
        })
    }

    /// Play until the session ends
    ///
    /// # Errors
    /// Only `ReplayDiverged`, or `Finished` if the session already ended;
    /// everything else is recovered from or turned into an outcome.
    pub fn run<C>(&mut self, collaborator: &mut C) -> Result<Outcome, SessionError>
    where
        C: Collaborator + ?Sized,
    {
        loop {
            if let Some(outcome) = &self.outcome {
                collaborator.finished(outcome);
                return Ok(outcome.clone());
            }

            let guess = match self.next_guess() {
                Ok(guess) => guess,
                Err(SessionError::Exhausted) => {
                    log::info!("strategy exhausted on turn {}", self.turn() + 1);
                    self.recover(collaborator)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let Some(Pending {
                initial,
                correcting,
                ..
            }) = self.pending.clone()
            else {
                return Err(SessionError::NoPendingGuess);
            };
            let turn = self.turn();
            let prompt = Prompt {
                turn,
                max_turns: self.config.max_turns,
                guess: &guess,
                initial: &initial,
                correcting,
                can_undo: !self.history.is_empty(),
                rewinds: self.rewinds,
            };

            match collaborator.feedback(&prompt) {
                Reply::Feedback(feedback) => match self.submit(feedback.clone()) {
                    Ok(_) => collaborator.recorded(turn, &guess, &feedback),
                    Err(e @ (SessionError::MalformedFeedback { .. } | SessionError::UnknownStatus)) => {
                        log::warn!("feedback for {guess} rejected: {e}");
                        collaborator.rejected(&e);
                    }
                    Err(e) => return Err(e),
                },
                Reply::Undo => match self.undo() {
                    Ok(()) => {}
                    Err(e @ SessionError::NothingToUndo) => collaborator.rejected(&e),
                    Err(e) => return Err(e),
                },
                Reply::Quit => {
                    self.quit();
                }
            }
        }
    }

    fn recover<C>(&mut self, collaborator: &mut C) -> Result<(), SessionError>
    where
        C: Collaborator + ?Sized,
    {
        match collaborator.rewind(&self.history) {
            RewindReply::Turn(turn) => match self.rewind_to(turn) {
                Ok(()) => {}
                Err(SessionError::InvalidTurn { .. }) => {
                    log::warn!("cannot rewind to turn {turn}");
                    self.finish(Outcome::Abort {
                        reason: AbortReason::InvalidRewind(turn.to_string()),
                    });
                }
                Err(e) => return Err(e),
            },
            RewindReply::Reveal(text) => {
                self.reveal(&text);
            }
        }
        Ok(())
    }

    /// Rebuild the strategy from `history[..index]` and show entry `index` again
    ///
    /// Nothing changes unless the replay succeeds.
    fn reopen(&mut self, index: usize) -> Result<(), SessionError> {
        let strategy = self.replay(&self.history[..index])?;

        self.history.truncate(index + 1);
        let Some((guess, initial)) = self.history.pop() else {
            return Err(SessionError::InvalidTurn {
                turn: index + 1,
                available: 0,
            });
        };

        self.strategy = strategy;
        self.rewinds += 1;
        log::info!("rewound to turn {}: {guess} {initial}", index + 1);
        self.pending = Some(Pending {
            guess,
            initial,
            correcting: true,
        });
        Ok(())
    }

    fn replay(&self, entries: &[(Word, Feedback)]) -> Result<S, SessionError> {
        let mut strategy = (self.factory)();
        for (i, (guess, feedback)) in entries.iter().enumerate() {
            if !strategy.can_guess() {
                log::error!("replay ran dry before turn {}", i + 1);
                return Err(SessionError::ReplayDiverged { turn: i + 1 });
            }
            strategy.feedback(guess, feedback);
        }
        Ok(strategy)
    }

    fn validate(&self, feedback: &Feedback) -> Result<(), SessionError> {
        if feedback.len() != self.config.word_length {
            return Err(SessionError::MalformedFeedback {
                expected: self.config.word_length,
                actual: feedback.len(),
            });
        }
        if !feedback.is_well_formed(self.config.word_length) {
            return Err(SessionError::UnknownStatus);
        }
        Ok(())
    }

    const fn ensure_running(&self) -> Result<(), SessionError> {
        if self.outcome.is_some() {
            Err(SessionError::Finished)
        } else {
            Ok(())
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.pending = None;
        self.outcome = Some(outcome.clone());
        outcome
    }
}
