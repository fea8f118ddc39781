use std::path::PathBuf;
use std::sync::OnceLock;

/// Where pomodoro keeps its files.
///
///   Config:  $XDG_CONFIG_HOME/pomodoro  (~/.config/pomodoro)
///   Data:    $XDG_DATA_HOME/pomodoro    (~/.local/share/pomodoro)
///
/// On macOS both resolve under ~/Library/Application Support. The `dirs`
/// crate does the platform lookup; results are cached for the process.

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

const APP_DIR: &str = "pomodoro";

pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    })
}

pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    })
}

/// <config_dir>/config.toml
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// <data_dir>/pomodoro.log
pub fn log_file() -> PathBuf {
    data_dir().join("pomodoro.log")
}
