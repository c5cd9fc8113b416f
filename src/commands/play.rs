//! Answer-mode game on a line-oriented terminal
//!
//! Each input line is a guess or a control command.

use super::Control;
use crate::output::{print_candidates, print_history, print_outcome, print_turn};
use crate::session::{Session, Submission};
use anyhow::Result;
use colored::Colorize;
use std::io::BufRead;

/// Results across the games played in one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, won: bool, guesses: usize) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }
}

/// Play answer-mode games reading guesses from `input`
///
/// Errors from a single line are reported and the game continues.
///
/// # Errors
///
/// Returns an error if reading `input` fails or a new game cannot be drawn.
pub fn run_play<R: BufRead>(session: &mut Session<'_>, input: R) -> Result<Statistics> {
    let mut stats = Statistics::default();
    let mut show_candidates = false;
    let mut show_count = true;

    println!(
        "Guess the {}-letter word in {} tries.",
        session.config().word_length,
        session.config().max_guesses
    );
    println!("Commands: '!' new game, '@' replay, '%' candidates, '#' counts, 'quit'\n");

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // a playable word is always a guess, even if it spells a command
        let is_guess = line.len() == session.config().word_length
            && session.store().is_word(line);
        let control = if is_guess { None } else { Control::parse(line) };

        match control {
            Some(Control::Quit) => break,
            Some(Control::NewGame) => {
                session.restart()?;
                println!("🔄 New game started!\n");
                continue;
            }
            Some(Control::Reset) => {
                session.reset();
                println!("🔄 Replaying the same word!\n");
                continue;
            }
            Some(Control::ToggleCandidates) => {
                show_candidates = !show_candidates;
                if show_candidates {
                    print_candidates(session.candidates());
                }
                continue;
            }
            Some(Control::ToggleCount) => {
                show_count = !show_count;
                continue;
            }
            None => {}
        }

        if let Err(e) = session.set_input(line) {
            println!("{} {e}", "❌".red());
            continue;
        }

        match session.submit() {
            Ok(Submission::Ignored) => {
                println!("Game over - '!' for a new game or '@' to replay.");
            }
            Ok(Submission::NotAWord(word)) => {
                println!("{} '{word}' is not in the word list", "❌".red());
            }
            Ok(Submission::Recorded(turn)) => {
                print_turn(session.history().len(), &turn, show_count);
                if turn.finished {
                    let guesses = session.history().len();
                    stats.record(session.is_won(), guesses);
                    print_outcome(session.is_won(), guesses, session.answer());
                    print_history(session.history());
                } else if show_candidates {
                    print_candidates(session.candidates());
                }
            }
            Err(e) => println!("{} {e}", "❌".red()),
        }
    }

    log::debug!(
        "Played {} games, won {}",
        stats.total_games,
        stats.games_won
    );
    Ok(stats)
}
