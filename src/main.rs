//! Reverse Wordle - CLI
//!
//! Think of a word and color the guesses; the program works out what you picked.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use rand::prelude::IndexedRandom;
use std::io;
use std::path::PathBuf;
use wordle_guesser::{
    commands::{BenchmarkConfig, PlayConfig, SolveConfig, run_benchmark, run_play, solve_word},
    core::{Scoring, Word},
    interactive::run_tui,
    output::{print_benchmark_result, print_solve_result},
    session::SessionConfig,
    solver::{StrategyFactory, StrategyName, rng_for},
    wordlists::{DEFAULT_TREE, DEFAULT_WORDS, load_dictionary, load_tree},
};

#[derive(Parser)]
#[command(
    name = "wordle_guesser",
    about = "Reverse Wordle: think of a word, color my guesses, and I'll find it",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: filter (default), tree, random
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyName::Filter)]
    strategy: StrategyName,

    /// Dictionary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS)]
    words: PathBuf,

    /// Decision tree JSON used by the tree strategy
    #[arg(short = 't', long, global = true, default_value = DEFAULT_TREE)]
    tree: PathBuf,

    /// Word length
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_turns: usize,

    /// Seed for random choices (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// How automatic scoring treats repeated letters
    #[arg(long, global = true, value_enum, default_value_t = Scoring::SinglePass)]
    scoring: Scoring,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, typing the colors (default)
    Play,

    /// Play full-screen, picking the colors with the keyboard
    Tui,

    /// Watch a strategy find a given word
    Solve {
        /// The secret word
        word: String,

        /// Show colored tiles and tree keys
        #[arg(short, long)]
        verbose: bool,
    },

    /// Measure a strategy over dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Test every dictionary word instead of a sample
        #[arg(short, long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    ensure!(cli.length > 0, "Word length must be at least 1");
    ensure!(cli.max_turns > 0, "At least one turn is needed");

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    let session = SessionConfig::new(cli.length, cli.max_turns);

    let benchmarking = matches!(cli.command, Some(Commands::Benchmark { .. }));
    let dictionary = if cli.strategy == StrategyName::Tree && !benchmarking {
        Vec::new()
    } else {
        load_dictionary(&cli.words, cli.length)
            .with_context(|| format!("Failed to load dictionary {}", cli.words.display()))?
    };
    let tree = if cli.strategy == StrategyName::Tree {
        Some(
            load_tree(&cli.tree, cli.length)
                .with_context(|| format!("Failed to load decision tree {}", cli.tree.display()))?,
        )
    } else {
        None
    };

    let factory = match cli.strategy {
        StrategyName::Tree => {
            StrategyFactory::Tree(tree.as_ref().context("Decision tree not loaded")?)
        }
        StrategyName::Filter => StrategyFactory::Filter {
            dictionary: &dictionary,
            seed: Some(seed),
        },
        StrategyName::Random => StrategyFactory::Random {
            dictionary: &dictionary,
            seed: Some(seed),
        },
    };

    let play = PlayConfig {
        session,
        scoring: cli.scoring,
        seed: Some(seed),
    };

    match cli.command {
        None | Some(Commands::Play) => {
            run_play(&factory, play, io::stdin().lock(), io::stdout().lock())?;
        }
        Some(Commands::Tui) => {
            run_tui(&factory, play)?;
        }
        Some(Commands::Solve { word, verbose }) => {
            let secret = Word::with_length(word.as_str(), cli.length)
                .with_context(|| format!("Invalid secret word '{word}'"))?;
            let config = SolveConfig {
                secret,
                session,
                scoring: cli.scoring,
                salt: None,
            };
            let result = solve_word(config, &factory)?;
            print_solve_result(&result, verbose);
        }
        Some(Commands::Benchmark { count, all }) => {
            let secrets: Vec<Word> = if all {
                dictionary.clone()
            } else {
                dictionary
                    .choose_multiple(&mut rng_for(Some(seed), None), count)
                    .cloned()
                    .collect()
            };
            println!(
                "🎯 Testing {} words with the {} strategy...",
                secrets.len(),
                factory.name()
            );
            let config = BenchmarkConfig {
                session,
                scoring: cli.scoring,
                show_progress: true,
            };
            let result = run_benchmark(&factory, &secrets, config)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
