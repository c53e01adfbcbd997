//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod flavor;
pub mod formatters;

pub use display::{intro_lines, outcome_line, print_benchmark_result, print_solve_result};
pub use flavor::Flavor;
