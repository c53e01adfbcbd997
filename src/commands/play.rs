//! Line-based interactive mode
//!
//! The player keeps a word in mind and types the colors for each guess.

use crate::core::{Feedback, Scoring, Status, Word};
use crate::output::flavor::{self, Flavor};
use crate::output::formatters::{inline_tiles, record_line};
use crate::output::{intro_lines, outcome_line};
use crate::session::{
    Collaborator, Outcome, Prompt, Reply, RewindReply, SessionConfig, SessionController,
    SessionError,
};
use crate::solver::{StrategyFactory, rng_for};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Settings for an interactive session
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    pub session: SessionConfig,
    /// Only used for the worked example in the intro
    pub scoring: Scoring,
    pub seed: Option<u64>,
}

/// Collaborator that reads replies line by line
pub struct StdinCollaborator<R, W> {
    input: R,
    output: W,
    flavor: Flavor,
    max_turns: usize,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> StdinCollaborator<R, W> {
    pub fn new(input: R, output: W, flavor: Flavor, max_turns: usize) -> Self {
        Self {
            input,
            output,
            flavor,
            max_turns,
            error: None,
        }
    }

    /// First I/O error hit while talking to the player
    pub const fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn say(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.output, "{line}") {
            self.error = Some(e);
        }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        let written = write!(self.output, "{prompt} ").and_then(|()| self.output.flush());
        if let Err(e) = written {
            self.error = Some(e);
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Collaborator for StdinCollaborator<R, W> {
    fn feedback(&mut self, prompt: &Prompt<'_>) -> Reply {
        let announcement = if prompt.correcting {
            Flavor::correction_line(prompt.rewinds, prompt.turn, prompt.max_turns, prompt.guess.text())
        } else {
            self.flavor
                .guess_line(prompt.turn, prompt.max_turns, prompt.guess.text())
        };
        self.say(&announcement);

        let hint = if prompt.can_undo {
            "Colors (G/Y/-), 'win', 'u' to change the last entry, 'q' to quit"
        } else {
            "Colors (G/Y/-), 'win', 'q' to quit"
        };
        let current = format!("[{}]", inline_tiles(prompt.guess, prompt.initial));

        loop {
            let Some(input) = self.ask(&format!("{hint} {current}:")) else {
                return Reply::Quit;
            };
            match input.to_lowercase().as_str() {
                // Enter keeps the colors shown
                "" => return Reply::Feedback(prompt.initial.clone()),
                "q" | "quit" | "exit" => return Reply::Quit,
                "u" | "undo" => return Reply::Undo,
                "win" | "correct" | "yes" | "solved" => {
                    return Reply::Feedback(Feedback::all(Status::Placed, prompt.guess.len()));
                }
                other => match Feedback::parse(other) {
                    Some(feedback) => return Reply::Feedback(feedback),
                    None => self.say(&"❌ Invalid colors! Use G/Y/-, 0/1/2 or 🟩🟨⬛".red().to_string()),
                },
            }
        }
    }

    fn rewind(&mut self, history: &[(Word, Feedback)]) -> RewindReply {
        self.say(flavor::OUT_OF_GUESSES);
        for (turn, (guess, feedback)) in history.iter().enumerate() {
            let line = record_line(turn, self.max_turns, guess, feedback);
            self.say(&line);
        }
        match self.ask(flavor::REWIND_PROMPT) {
            Some(input) => match input.parse::<usize>() {
                Ok(turn) => RewindReply::Turn(turn),
                Err(_) => RewindReply::Reveal(input),
            },
            None => RewindReply::Reveal(String::new()),
        }
    }

    fn recorded(&mut self, turn: usize, guess: &Word, feedback: &Feedback) {
        let line = record_line(turn, self.max_turns, guess, feedback);
        self.say(&line);
    }

    fn rejected(&mut self, error: &SessionError) {
        self.say(&format!("❌ {error}").red().to_string());
    }

    fn finished(&mut self, outcome: &Outcome) {
        self.say(&outcome_line(outcome));
    }
}

/// Run the line-based interactive mode
///
/// # Errors
/// Returns an error on I/O failure or if the session cannot replay its history.
pub fn run_play<R: BufRead, W: Write>(
    factory: &StrategyFactory<'_>,
    config: PlayConfig,
    input: R,
    output: W,
) -> Result<Outcome> {
    let flavor = Flavor::new(&mut rng_for(config.seed, None));
    let mut collaborator = StdinCollaborator::new(input, output, flavor, config.session.max_turns);

    let intro = intro_lines(config.session.word_length, config.scoring);
    if let Some((ready, rest)) = intro.split_first() {
        // Any line, or end of input, means ready
        collaborator.ask(ready);
        for line in rest {
            collaborator.say(line);
        }
    }

    let mut session = SessionController::new(config.session, || factory.build());
    let outcome = session
        .run(&mut collaborator)
        .context("Session could not rebuild its history")?;

    if let Some(e) = collaborator.take_error() {
        return Err(e).context("Failed to talk to the player");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AbortReason;
    use crate::solver::DecisionTree;
    use std::io::Cursor;

    const TREE: &str = r#"{
        "guess": "salet",
        "map": {
            "00000": {"guess": "courd", "map": {"02000": "might"}},
            "10000": "brash"
        }
    }"#;

    fn play(factory: &StrategyFactory<'_>, script: &str) -> (Outcome, String) {
        colored::control::set_override(false);
        let config = PlayConfig {
            seed: Some(1),
            ..PlayConfig::default()
        };
        let mut output = Vec::new();
        let outcome = run_play(factory, config, Cursor::new(script.to_string()), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn plays_a_tree_to_the_end() {
        let tree = DecisionTree::from_json(TREE, 5).unwrap();
        let (outcome, transcript) = play(&StrategyFactory::Tree(&tree), "\n-----\n-g---\nwin\n");

        assert_eq!(
            outcome,
            Outcome::Win {
                guess: Word::new("might").unwrap(),
                turns: 3
            }
        );
        assert!(transcript.contains("My first guess is 'salet'"));
        assert!(transcript.contains("My second guess is 'courd'"));
        assert!(transcript.contains(" (1)  S  A  L  E  T "));
        assert!(transcript.trim_end().ends_with(flavor::WIN));
    }

    #[test]
    fn enter_accepts_the_shown_colors() {
        let tree = DecisionTree::from_json(TREE, 5).unwrap();
        // Blank feedback means all absent, which leads to courd
        let (_, transcript) = play(&StrategyFactory::Tree(&tree), "\n\nq\n");
        assert!(transcript.contains("'courd'"));
    }

    #[test]
    fn undo_shows_the_guess_again() {
        let tree = DecisionTree::from_json(TREE, 5).unwrap();
        let (outcome, transcript) =
            play(&StrategyFactory::Tree(&tree), "\n00000\nu\nyxxxx\nggggg\n");

        assert_eq!(
            outcome,
            Outcome::Win {
                guess: Word::new("brash").unwrap(),
                turns: 2
            }
        );
        assert!(transcript.contains("Okay, first guess again. I guessed 'salet'"));
    }

    #[test]
    fn bad_input_is_asked_again() {
        let tree = DecisionTree::from_json(TREE, 5).unwrap();
        let (outcome, transcript) = play(&StrategyFactory::Tree(&tree), "\nbanana\nggg\nggggg\n");

        assert!(outcome.is_win());
        assert!(transcript.contains("Invalid colors"));
        assert!(transcript.contains("feedback must have 5 letters, got 3"));
    }

    #[test]
    fn exhaustion_then_rewind() {
        let tree = DecisionTree::from_json(TREE, 5).unwrap();
        let (outcome, transcript) = play(
            &StrategyFactory::Tree(&tree),
            "\n00000\n11111\n1\n10000\nggggg\n",
        );

        assert!(outcome.is_win());
        assert!(transcript.contains(flavor::OUT_OF_GUESSES));
    }

    #[test]
    fn exhaustion_then_reveal_or_nonsense() {
        let tree = DecisionTree::from_json(TREE, 5).unwrap();
        let factory = StrategyFactory::Tree(&tree);

        let (outcome, _) = play(&factory, "\n21212\nzesty\n");
        assert_eq!(
            outcome,
            Outcome::Loss {
                revealed: Some(Word::new("zesty").unwrap())
            }
        );

        let (outcome, transcript) = play(&factory, "\n21212\nwhat?\n");
        assert_eq!(
            outcome,
            Outcome::Abort {
                reason: AbortReason::InvalidRewind("what?".into())
            }
        );
        assert!(transcript.contains(flavor::NOT_A_WORD));
    }

    #[test]
    fn end_of_input_quits() {
        let tree = DecisionTree::from_json(TREE, 5).unwrap();
        let (outcome, _) = play(&StrategyFactory::Tree(&tree), "");
        assert_eq!(
            outcome,
            Outcome::Abort {
                reason: AbortReason::Quit
            }
        );
    }
}
