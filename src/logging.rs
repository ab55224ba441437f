//! Log setup
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stdout/stderr. Logging is optional: with no file configured nothing is
//! installed and the `tracing` macros are no-ops.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

/// Install the global subscriber writing to the configured log file.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init(config: &Config) -> io::Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(true)
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = Config {
            log_file: None,
            ..Config::default()
        };
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("impostor-log-{}", std::process::id()));
        let path = dir.join("nested").join("impostor.log");

        open_log_file(&path).unwrap();
        assert!(path.is_file());

        fs::remove_dir_all(&dir).unwrap();
    }
}
