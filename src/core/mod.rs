//! Core domain types
//!
//! Words, per-letter verdicts and feedback scoring. Everything here is pure and
//! independent of how guesses are chosen or how a session is driven.

mod feedback;
mod status;
mod word;

pub use feedback::{Feedback, Scoring};
pub use status::Status;
pub use word::{Word, WordError};
