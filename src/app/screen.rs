//! Session stages and per-screen selection state
//!
//! The session moves through three stages:
//! - Setup: enter and remove player names
//! - Reveal: each player privately drags their card up
//! - Summary: everyone has seen their word

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Setup,
    Reveal,
    Summary,
}

/// Keyboard focus on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupFocus {
    #[default]
    NameInput,
    PlayerList,
    StartButton,
}

impl SetupFocus {
    /// Next control in Tab order
    pub fn next(self) -> Self {
        match self {
            SetupFocus::NameInput => SetupFocus::PlayerList,
            SetupFocus::PlayerList => SetupFocus::StartButton,
            SetupFocus::StartButton => SetupFocus::NameInput,
        }
    }

    /// Previous control in Tab order
    pub fn prev(self) -> Self {
        match self {
            SetupFocus::NameInput => SetupFocus::StartButton,
            SetupFocus::PlayerList => SetupFocus::NameInput,
            SetupFocus::StartButton => SetupFocus::PlayerList,
        }
    }
}

/// Action on the summary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOption {
    NewWord,
    EditPlayers,
}

impl SummaryOption {
    /// Get all options in display order
    pub fn all() -> &'static [SummaryOption] {
        &[SummaryOption::NewWord, SummaryOption::EditPlayers]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            SummaryOption::NewWord => "New word",
            SummaryOption::EditPlayers => "Edit players",
        }
    }
}
