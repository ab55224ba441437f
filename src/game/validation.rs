//! Player name validation and setup errors
//!
//! Names are checked against:
//! - Minimum length (2 characters, after trimming)
//! - Case-insensitive uniqueness within the current player list

use super::Player;
use thiserror::Error;

/// Minimum player name length, in characters
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum number of players to start a round
pub const MIN_PLAYERS: usize = 3;

/// Problems with user input on the setup screen.
///
/// Each one is shown inline and leaves the stage unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("Names need at least {min} characters.")]
    NameTooShort { min: usize },
    #[error("That name is already on the list.")]
    DuplicateName,
    #[error("You need at least {min} players to start.")]
    NotEnoughPlayers { min: usize },
    #[error("The word list is empty. Add at least one word.")]
    EmptyWordList,
}

/// Validate a submitted name against the current players.
///
/// Returns the trimmed name on success.
pub fn validate_name(input: &str, players: &[Player]) -> Result<String, SetupError> {
    let name = input.trim();

    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(SetupError::NameTooShort {
            min: MIN_NAME_LENGTH,
        });
    }

    let lower = name.to_lowercase();
    if players.iter().any(|p| p.name.to_lowercase() == lower) {
        return Err(SetupError::DuplicateName);
    }

    Ok(name.to_string())
}
