//! Full-screen keyboard mode
//!
//! Colors are picked tile by tile instead of typed.

pub mod app;
pub mod rendering;

pub use app::{App, FeedbackEditor, TuiCollaborator, run_tui};
