//! Benchmark command
//!
//! Plays automatic sessions against many secrets in parallel.

use super::solve::{SolveConfig, solve_word};
use crate::core::{Scoring, Word};
use crate::session::{Outcome, SessionConfig, SessionError};
use crate::solver::{StrategyFactory, StrategyName};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: StrategyName,
    pub total_words: usize,
    pub wins: usize,
    /// Losses where the strategy ran out of guesses before the turn limit
    pub exhausted: usize,
    /// Guesses summed over won games only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Won games by number of guesses
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_words as f64
        }
    }
}

/// Settings shared by every game of a benchmark
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    pub session: SessionConfig,
    pub scoring: Scoring,
    pub show_progress: bool,
}

/// Solve every secret once
///
/// Game `i` builds its strategies with salt `i`, so a seeded run is
/// reproducible regardless of thread scheduling.
///
/// # Errors
/// Fails if any game reports `SessionError::ReplayDiverged`.
pub fn run_benchmark(
    factory: &StrategyFactory<'_>,
    secrets: &[Word],
    config: BenchmarkConfig,
) -> Result<BenchmarkResult, SessionError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(factory.name().to_string());

    let outcomes = secrets
        .par_iter()
        .enumerate()
        .map(|(i, secret)| {
            let result = solve_word(
                SolveConfig {
                    secret: secret.clone(),
                    session: config.session,
                    scoring: config.scoring,
                    salt: Some(i as u64),
                },
                factory,
            );
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();

    let mut result = BenchmarkResult {
        strategy: factory.name(),
        total_words: secrets.len(),
        wins: 0,
        exhausted: 0,
        total_guesses: 0,
        average_guesses: 0.0,
        min_guesses: 0,
        max_guesses: 0,
        distribution: FxHashMap::default(),
        failures: Vec::new(),
        duration: Duration::ZERO,
        words_per_second: 0.0,
    };

    let mut min_guesses = usize::MAX;
    for solved in outcomes {
        match solved.outcome {
            Outcome::Win { turns, .. } => {
                result.wins += 1;
                result.total_guesses += turns;
                min_guesses = min_guesses.min(turns);
                result.max_guesses = result.max_guesses.max(turns);
                *result.distribution.entry(turns).or_insert(0) += 1;
            }
            Outcome::Loss { revealed } => {
                if revealed.is_some() {
                    result.exhausted += 1;
                }
                result.failures.push(solved.secret);
            }
            Outcome::Abort { .. } => result.failures.push(solved.secret),
        }
    }

    if result.wins > 0 {
        result.min_guesses = min_guesses;
        result.average_guesses = result.total_guesses as f64 / result.wins as f64;
    }
    result.duration = start.elapsed();
    result.words_per_second = secrets.len() as f64 / result.duration.as_secs_f64().max(f64::EPSILON);

    log::info!(
        "benchmark: {} won {}/{} in {:.2}s",
        result.strategy,
        result.wins,
        result.total_words,
        result.duration.as_secs_f64()
    );
    Ok(result)
}
