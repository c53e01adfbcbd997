//! Display functions for command results

use super::flavor;
use super::formatters::{create_progress_bar, feedback_to_emoji, inline_tiles, paint};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Feedback, Scoring, Status, Word};
use crate::session::{AbortReason, Outcome};
use colored::Colorize;

/// How to score guesses, shown before the first turn
#[must_use]
pub fn intro_lines(word_length: usize, scoring: Scoring) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Please think of a {word_length}-letter word, but don't tell me what it is. Press enter when you're ready."
        ),
        "I will figure out what you are thinking of by guessing a word at a time.".to_string(),
        format!(
            "Then you tell me which letters I got right, using {} if they are in the word and {} if they are also in the right place.",
            paint("this color", Status::Present),
            paint("this color", Status::Placed)
        ),
        "If my guess has more than one of the same letter, and it is in your word, only color as many as appear in your word, giving priority to the most correct ones.".to_string(),
    ];

    // The worked example only makes sense for five letters
    if word_length == 5 {
        let secret = Word::new("allow");
        let ladle = Word::new("ladle");
        let lolly = Word::new("lolly");
        if let (Ok(secret), Ok(ladle), Ok(lolly)) = (secret, ladle, lolly) {
            let ladle_score = Feedback::calculate_with(scoring, &ladle, &secret);
            let lolly_score = Feedback::calculate_with(scoring, &lolly, &secret);
            lines.push(format!(
                "E.g. if you are thinking of 'allow', {} and {} would be correct colorings for these guesses.",
                inline_tiles(&ladle, &ladle_score),
                inline_tiles(&lolly, &lolly_score)
            ));
        }
    }
    lines.push("Now, play the game!".to_string());
    lines
}

/// Closing line for an interactive session
#[must_use]
pub fn outcome_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Win { .. } => flavor::WIN.to_string(),
        Outcome::Loss { revealed: None } => flavor::OUT_OF_TURNS.to_string(),
        Outcome::Loss {
            revealed: Some(word),
        } => format!("'{word}'? Never heard of it."),
        Outcome::Abort {
            reason: AbortReason::InvalidRewind(_),
        } => flavor::NOT_A_WORD.to_string(),
        Outcome::Abort {
            reason: AbortReason::Quit,
        } => "Fine, be that way.".to_string(),
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (guess, feedback)) in result.steps.iter().enumerate() {
        if verbose {
            println!("\nTurn {}: {}", i + 1, inline_tiles(guess, feedback));
            println!("  Key: {feedback}");
        } else {
            println!(
                "\nTurn {}: {} {}",
                i + 1,
                guess.text().to_uppercase(),
                feedback_to_emoji(feedback)
            );
        }
    }

    println!();
    match &result.outcome {
        Outcome::Win { turns, .. } => println!(
            "{}",
            format!("✅ Solved in {turns} guesses!").green().bold()
        ),
        Outcome::Loss { revealed: Some(_) } => println!(
            "{}",
            format!(
                "❌ Ran out of ideas after {} guesses",
                result.guesses()
            )
            .red()
            .bold()
        ),
        Outcome::Loss { revealed: None } => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses())
                .red()
                .bold()
        ),
        Outcome::Abort { .. } => println!("{}", "❌ Aborted".red().bold()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.strategy.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.wins,
        result.win_rate() * 100.0
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Out of guesses:   {}", result.exhausted);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, count) in counts {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        let shown: Vec<&str> = result.failures.iter().take(20).map(Word::text).collect();
        println!("\n❌ {} {}", "Missed:".red().bold(), shown.join(", "));
        if result.failures.len() > shown.len() {
            println!("   ...and {} more", result.failures.len() - shown.len());
        }
    }
}
