use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::paths;

/// Filter used when RUST_LOG is not set.
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("pomodoro={level}")
}

/// Send tracing output to <data_dir>/pomodoro.log.
///
/// The TUI owns the terminal, so nothing may be written to stdout/stderr
/// while it runs. On error no subscriber is installed and every tracing
/// event is discarded.
pub fn init(verbose: bool) -> Result<()> {
    init_at(&paths::log_file(), verbose)
}

fn init_at(path: &Path, verbose: bool) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_switches_to_debug() {
        assert_eq!(default_filter(false), "pomodoro=info");
        assert_eq!(default_filter(true), "pomodoro=debug");
    }

    #[test]
    fn unwritable_log_location_is_an_error_not_a_panic() {
        // A regular file where the log directory should be
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("pomodoro").join("pomodoro.log");

        let err = init_at(&path, false).unwrap_err();
        assert!(err.to_string().contains("Failed to create log directory"));
    }
}
