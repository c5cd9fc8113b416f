//! Command implementations

pub mod assist;
pub mod clue;
pub mod groups;
pub mod play;

pub use assist::run_assist;
pub use clue::compute_clue;
pub use groups::{GroupAnalysis, analyze_guess, parse_observation};
pub use play::{Statistics, run_play};

/// Line commands shared by the interactive loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// `!` - new game with a fresh answer
    NewGame,
    /// `@` - replay the current game from the start
    Reset,
    /// `%` - show or hide the candidate list
    ToggleCandidates,
    /// `#` - show or hide candidate counts
    ToggleCount,
    Quit,
}

impl Control {
    /// Recognize a control line; anything else is game input
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "!" | "new" => Some(Self::NewGame),
            "@" | "reset" => Some(Self::Reset),
            "%" => Some(Self::ToggleCandidates),
            "#" => Some(Self::ToggleCount),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}
