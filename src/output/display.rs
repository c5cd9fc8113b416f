//! Display functions for sessions and command results

use super::formatters::{colorize_guess, create_progress_bar, word_list};
use crate::commands::GroupAnalysis;
use crate::core::{Clue, Word};
use crate::session::{HistoryEntry, Turn};
use colored::Colorize;

/// Candidate lists longer than this are truncated
const LIST_LIMIT: usize = 12;

/// Print a single clue computation
pub fn print_clue(guess: &Word, clue: &Clue) {
    println!(
        "{}  {}  {}",
        colorize_guess(guess, clue),
        clue.to_emoji(),
        clue.to_string().bright_black()
    );
}

/// Print one recorded turn
pub fn print_turn(turn_number: usize, turn: &Turn, show_count: bool) {
    print!(
        "{:>2}. {}  {}",
        turn_number,
        colorize_guess(&turn.guess, &turn.clue),
        turn.clue.to_emoji()
    );
    if show_count {
        print!(
            "  {} → {} candidates ({} groups)",
            turn.candidates_before,
            turn.candidates_after.to_string().bright_yellow().bold(),
            turn.groups
        );
    }
    println!();
}

/// Print the remaining candidates
pub fn print_candidates(candidates: &[Word]) {
    if candidates.is_empty() {
        println!("{}", "No candidates remain - a clue may be wrong.".red());
        return;
    }
    println!("    {}", word_list(candidates, LIST_LIMIT).bright_white());
}

/// Print the guess history with emoji
pub fn print_history(history: &[HistoryEntry]) {
    for (i, entry) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            entry.guess.text().to_uppercase().bright_white().bold(),
            entry.clue.to_emoji()
        );
    }
}

/// Print the end of a game
pub fn print_outcome(won: bool, guesses: usize, answer: Option<&Word>) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    if won {
        println!(
            "{}",
            format!(
                "  Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        );
    } else {
        println!("{}", "  Out of guesses.".red().bold());
    }
    if let Some(answer) = answer {
        println!(
            "  Answer: {}",
            answer.text().to_uppercase().bright_yellow().bold()
        );
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print how a guess splits the remaining candidates
pub fn print_group_analysis(analysis: &GroupAnalysis, limit: usize) {
    let metrics = analysis.groups.metrics();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GROUPS FOR:".bright_cyan().bold(),
        analysis.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} candidates:", analysis.candidates);
    println!("   Groups:      {}", metrics.groups);
    println!(
        "   Entropy:     {}",
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Expected:    {:.1} candidates remain", metrics.expected_remaining);
    println!("   Worst case:  {} candidates\n", metrics.max_partition);

    let largest = metrics.max_partition as f64;
    for (clue, members) in analysis.groups.by_size().into_iter().take(limit) {
        println!(
            "   {} {} {:>4}  {}",
            clue.to_emoji(),
            create_progress_bar(members.len() as f64, largest, 20).green(),
            members.len(),
            word_list(members, 6).bright_black()
        );
    }
    if analysis.groups.len() > limit {
        println!("   … {} more groups", analysis.groups.len() - limit);
    }
}
