//! Banter shown around each guess
//!
//! Purely cosmetic; nothing here affects play.

use rand::Rng;
use rand::seq::SliceRandom;

const TAUNTS: &[&str] = &[
    "...? Yeah right.",
    ", like what...?",
    ", how's that for a first guess?",
    ", whaddaya think?",
    ", buddy.",
    ", and you'd better believe it.",
    "... take notes.",
    ", you wouldn't know about it.",
    ", inshallah.",
];

const CORRECTION_PROMPTS: usize = 4;

pub const OUT_OF_GUESSES: &str = "Well, I'm all out of guesses.";
pub const REWIND_PROMPT: &str = "You can change a clue and let me try again by entering its number now. Otherwise, tell me the word you were thinking of:";
pub const WIN: &str = "Game. Over.";
pub const OUT_OF_TURNS: &str = "I didn't fail, you ran out of RAM.";
pub const NOT_A_WORD: &str = "That's not a word.";

/// The nth ordinal, 0-indexed
///
/// ```
/// use wordle_guesser::output::flavor::ordinal;
///
/// assert_eq!(ordinal(0), "first");
/// assert_eq!(ordinal(6), "7th");
/// assert_eq!(ordinal(10), "11th");
/// assert_eq!(ordinal(21), "22nd");
/// ```
#[must_use]
pub fn ordinal(n: usize) -> String {
    const WORDS: [&str; 6] = ["first", "second", "third", "fourth", "fifth", "sixth"];
    if let Some(word) = WORDS.get(n) {
        return (*word).to_string();
    }
    let n = n + 1;
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}

/// Ordinal for a zero-based turn, with the final one called "last"
#[must_use]
pub fn turn_name(turn: usize, max_turns: usize) -> String {
    if turn + 1 >= max_turns {
        "last".to_string()
    } else {
        ordinal(turn)
    }
}

/// Rotating taunts, shuffled once per session
pub struct Flavor {
    taunts: Vec<&'static str>,
    said: usize,
}

impl Flavor {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut taunts = TAUNTS.to_vec();
        taunts.shuffle(rng);
        Self { taunts, said: 0 }
    }

    /// Announce a fresh guess
    pub fn guess_line(&mut self, turn: usize, max_turns: usize, guess: &str) -> String {
        let taunt = self.taunts[self.said % self.taunts.len()];
        self.said += 1;
        format!("My {} guess is '{guess}'{taunt}", turn_name(turn, max_turns))
    }

    /// Announce a guess shown again after the `rewinds`-th undo or rewind
    #[must_use]
    pub fn correction_line(rewinds: usize, turn: usize, max_turns: usize, guess: &str) -> String {
        let turn_name = turn_name(turn, max_turns);
        match rewinds.saturating_sub(1) % CORRECTION_PROMPTS {
            0 => format!(
                "Okay, {turn_name} guess again. I guessed '{guess}', please correct your marking professor."
            ),
            1 => format!(
                "Take a second look at my {turn_name} guess, '{guess}'. What do your elf eyes see?"
            ),
            2 => format!(
                "You've rewound time again, this time to the {turn_name} guess. How many times you gonna have to do this?"
            ),
            _ => format!("You're changing history my friend, from the {turn_name} guess forward."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::rng_for;

    #[test]
    fn ordinals() {
        let names: Vec<String> = (0..8).map(ordinal).collect();
        assert_eq!(
            names,
            vec!["first", "second", "third", "fourth", "fifth", "sixth", "7th", "8th"]
        );
        assert_eq!(ordinal(11), "12th");
        assert_eq!(ordinal(12), "13th");
        assert_eq!(ordinal(20), "21st");
        assert_eq!(ordinal(102), "103rd");
        assert_eq!(ordinal(111), "112th");
    }

    #[test]
    fn final_turn_is_last() {
        assert_eq!(turn_name(0, 6), "first");
        assert_eq!(turn_name(4, 6), "fifth");
        assert_eq!(turn_name(5, 6), "last");
        assert_eq!(turn_name(0, 1), "last");
    }

    #[test]
    fn taunts_rotate_through_the_whole_pool() {
        let mut flavor = Flavor::new(&mut rng_for(Some(4), None));
        let lines: Vec<String> = (0..TAUNTS.len() * 2)
            .map(|_| flavor.guess_line(0, 6, "salet"))
            .collect();

        assert!(lines.iter().all(|l| l.starts_with("My first guess is 'salet'")));
        assert_eq!(lines[..TAUNTS.len()], lines[TAUNTS.len()..]);
        let mut distinct = lines[..TAUNTS.len()].to_vec();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), TAUNTS.len());
    }

    #[test]
    fn correction_prompts_cycle() {
        let first = Flavor::correction_line(1, 1, 6, "courd");
        assert!(first.contains("second guess"));
        assert!(first.contains("'courd'"));
        assert_eq!(Flavor::correction_line(5, 1, 6, "courd"), first);
        assert_ne!(Flavor::correction_line(2, 1, 6, "courd"), first);
    }
}
