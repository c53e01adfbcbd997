//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayConfig, StdinCollaborator, run_play};
pub use solve::{SolveConfig, SolveResult, solve_word};
