//! Clue-mode assistant
//!
//! The user plays somewhere else and reports each guess with the clue they
//! were shown; the assistant narrows the candidates.

use super::Control;
use crate::core::Clue;
use crate::output::{print_candidates, print_outcome, print_turn};
use crate::session::{Mode, Session, Submission};
use anyhow::{Result, ensure};
use colored::Colorize;
use std::io::BufRead;

/// Read `<guess> <clue>` lines from `input` and report the candidates left
///
/// Clues may be written as digits (`12212`), letters (`YGGYG`, `-` for
/// no match) or emoji. Invalid lines are reported and skipped.
///
/// # Errors
///
/// Returns an error if the session is not in clue mode or reading fails.
pub fn run_assist<R: BufRead>(session: &mut Session<'_>, input: R) -> Result<()> {
    ensure!(
        session.mode() == Mode::Clue,
        "assist needs a clue-mode session"
    );

    println!(
        "Enter each {}-letter guess and its clue, e.g. 'crate 12212' or 'crate YGGYG'.",
        session.config().word_length
    );
    println!(
        "Starting with {} candidates. '!' starts over, 'quit' exits.\n",
        session.candidates().len()
    );

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Control::parse(line) {
            Some(Control::Quit) => break,
            Some(Control::NewGame | Control::Reset) => {
                session.reset();
                println!(
                    "🔄 Starting over with {} candidates\n",
                    session.candidates().len()
                );
                continue;
            }
            Some(Control::ToggleCandidates) => {
                print_candidates(session.candidates());
                continue;
            }
            Some(Control::ToggleCount) => {
                println!("{} candidates", session.candidates().len());
                continue;
            }
            None => {}
        }

        let Some((guess, clue_text)) = line.split_once(char::is_whitespace) else {
            println!("{} expected '<guess> <clue>'", "❌".red());
            continue;
        };

        let submitted = session
            .set_input(guess)
            .and_then(|()| Clue::parse(clue_text))
            .and_then(|clue| session.submit_clue(clue));

        match submitted {
            Ok(Submission::Recorded(turn)) => {
                print_turn(session.history().len(), &turn, true);
                if turn.finished {
                    print_outcome(session.is_won(), session.history().len(), session.answer());
                } else {
                    print_candidates(session.candidates());
                }
            }
            Ok(Submission::Ignored | Submission::NotAWord(_)) => {
                println!("Game over - '!' to start over.");
            }
            Err(e) => println!("{} {e}", "❌".red()),
        }
    }

    Ok(())
}
