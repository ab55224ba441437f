//! Runtime configuration
//!
//! Read once at startup from environment variables, with file locations
//! defaulting to the OS-standard config/data directories (via the
//! `directories` crate):
//!
//! - `IMPOSTOR_WORDS`: word file path (default `<config dir>/words.txt` if present)
//! - `IMPOSTOR_DRAG_ROWS`: rows of upward drag for a full reveal, 1 to 50
//! - `IMPOSTOR_MARKER`: word shown to the impostor
//! - `IMPOSTOR_LOG`: log file path, or `off`
//! - `IMPOSTOR_LOG_LEVEL`: trace, debug, info, warn or error

use crate::game::reveal::{DEFAULT_DRAG_THRESHOLD_ROWS, MAX_DRAG_THRESHOLD_ROWS};
use crate::game::words::WordList;
use crate::game::IMPOSTOR_WORD;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

pub const WORDS_VAR: &str = "IMPOSTOR_WORDS";
pub const DRAG_ROWS_VAR: &str = "IMPOSTOR_DRAG_ROWS";
pub const MARKER_VAR: &str = "IMPOSTOR_MARKER";
pub const LOG_VAR: &str = "IMPOSTOR_LOG";
pub const LOG_LEVEL_VAR: &str = "IMPOSTOR_LOG_LEVEL";

/// Word file name looked up in the config directory
const WORDS_FILE_NAME: &str = "words.txt";
/// Log file name in the data directory
const LOG_FILE_NAME: &str = "impostor.log";

/// Errors while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("failed to read word list {}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Custom word file, `None` for the built-in list
    pub words_file: Option<PathBuf>,
    /// Rows of upward drag for a full reveal
    pub drag_threshold: u16,
    /// Word given to the impostor
    pub impostor_word: String,
    /// Log destination, `None` disables logging
    pub log_file: Option<PathBuf>,
    /// Maximum log level
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_file: None,
            drag_threshold: DEFAULT_DRAG_THRESHOLD_ROWS,
            impostor_word: IMPOSTOR_WORD.to_string(),
            log_file: None,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("", "", "impostor");

        let default_words = dirs
            .as_ref()
            .map(|d| d.config_dir().join(WORDS_FILE_NAME))
            .filter(|path| path.is_file());
        let default_log = dirs
            .as_ref()
            .map(|d| d.data_local_dir().join(LOG_FILE_NAME));

        Self::from_lookup(|var| std::env::var(var).ok(), default_words, default_log)
    }

    /// Build configuration from a variable lookup and default paths.
    pub fn from_lookup<F>(
        lookup: F,
        default_words: Option<PathBuf>,
        default_log: Option<PathBuf>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            words_file: default_words,
            log_file: default_log,
            ..Config::default()
        };

        if let Some(path) = lookup(WORDS_VAR).filter(|v| !v.trim().is_empty()) {
            config.words_file = Some(PathBuf::from(path.trim()));
        }

        if let Some(value) = lookup(DRAG_ROWS_VAR) {
            config.drag_threshold = match value.trim().parse::<u16>() {
                Ok(rows) if (1..=MAX_DRAG_THRESHOLD_ROWS).contains(&rows) => rows,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: DRAG_ROWS_VAR,
                        value,
                        reason: "expected a whole number of rows from 1 to 50",
                    })
                }
            };
        }

        if let Some(value) = lookup(MARKER_VAR) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: MARKER_VAR,
                    value,
                    reason: "marker word cannot be empty",
                });
            }
            config.impostor_word = value.trim().to_string();
        }

        if let Some(value) = lookup(LOG_VAR) {
            let value = value.trim();
            config.log_file = if value.eq_ignore_ascii_case("off") {
                None
            } else if value.is_empty() {
                config.log_file
            } else {
                Some(PathBuf::from(value))
            };
        }

        if let Some(value) = lookup(LOG_LEVEL_VAR) {
            config.log_level = value
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: LOG_LEVEL_VAR,
                    value: value.clone(),
                    reason: "expected trace, debug, info, warn or error",
                })?;
        }

        Ok(config)
    }

    /// Load the configured word list, or the built-in one.
    pub fn load_words(&self) -> Result<WordList, ConfigError> {
        match &self.words_file {
            Some(path) => WordList::load(path).map_err(|source| ConfigError::WordList {
                path: path.clone(),
                source,
            }),
            None => Ok(WordList::default_list()),
        }
    }
}
