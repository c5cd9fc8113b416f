//! Wordle Clue - CLI
//!
//! Play against a hidden word, or report clues from another game and watch
//! the candidates narrow.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_clue::{
    commands::{analyze_guess, compute_clue, parse_observation, run_assist, run_play},
    log::init_logger,
    output::{print_clue, print_group_analysis},
    session::{Mode, Session, SessionConfig},
    wordlists::{WordStore, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_clue",
    about = "Wordle clue engine: play, assist, and inspect clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Guesses allowed per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 6,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_guesses: usize,

    /// Path to a word list, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a hidden word (default)
    Play,

    /// Report guesses and clues from another game
    Assist,

    /// Print the clue an answer gives for a guess
    Clue {
        /// The guessed word
        guess: String,

        /// The answer
        answer: String,
    },

    /// Show how a guess splits the remaining candidates
    Groups {
        /// Word to analyze
        guess: String,

        /// Earlier observation as guess=clue, e.g. crate=12212 (repeatable)
        #[arg(short, long = "after")]
        after: Vec<String>,

        /// Number of groups to list
        #[arg(long, default_value_t = 15)]
        limit: usize,
    },
}

fn load_store(path: Option<&Path>) -> Result<WordStore> {
    match path {
        None => Ok(WordStore::embedded()),
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            Ok(WordStore::new(words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let store = load_store(cli.wordlist.as_deref())?;
    log::debug!("Loaded {} words, lengths {:?}", store.len(), store.lengths());

    let config = SessionConfig::new(cli.length).with_max_guesses(cli.max_guesses);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&store, config),
        Commands::Assist => run_assist_command(&store, config.with_mode(Mode::Clue)),
        Commands::Clue { guess, answer } => {
            let (guess, clue) = compute_clue(&guess, &answer)?;
            print_clue(&guess, &clue);
            Ok(())
        }
        Commands::Groups {
            guess,
            after,
            limit,
        } => {
            let history = after
                .iter()
                .map(|text| parse_observation(text))
                .collect::<Result<Vec<_>>>()?;
            let analysis = analyze_guess(&guess, &history, store.dictionary(cli.length))?;
            print_group_analysis(&analysis, limit);
            Ok(())
        }
    }
}

fn run_play_command(store: &WordStore, config: SessionConfig) -> Result<()> {
    let mut session = Session::new(store, config)?;
    let stats = run_play(&mut session, io::stdin().lock())?;

    if stats.total_games > 0 {
        println!(
            "\nGames: {}  Won: {}",
            stats.total_games, stats.games_won
        );
    }
    Ok(())
}

fn run_assist_command(store: &WordStore, config: SessionConfig) -> Result<()> {
    let mut session = Session::new(store, config)?;
    run_assist(&mut session, io::stdin().lock())
}
