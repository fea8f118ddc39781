use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::timer::session::{DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};
use crate::timer::Durations;

/// Application configuration, loaded from config.toml.
///
/// Every section and field falls back to its Default when missing, so an
/// empty or absent file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timer: TimerConfig,
    pub sound: SoundConfig,
}

/// Starting durations. Adjustments made in the app are not written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub focus_minutes: u32,
    pub break_minutes: u32,
}

/// End-of-phase notification sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    /// WAV file to play instead of the generated tone.
    pub file: Option<PathBuf>,
    pub frequency_hz: f32,
    pub duration_ms: u64,
    /// Linear gain, 0.0–1.0.
    pub volume: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            sound: SoundConfig::default(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
            frequency_hz: 880.0,
            duration_ms: 600,
            volume: 0.4,
        }
    }
}

/// Out-of-range minutes in the file are snapped onto the valid grid
/// rather than rejected.
impl From<&TimerConfig> for Durations {
    fn from(cfg: &TimerConfig) -> Self {
        Durations::new(cfg.focus_minutes, cfg.break_minutes)
    }
}

/// Load config from $XDG_CONFIG_HOME/pomodoro/config.toml, or defaults if
/// the file doesn't exist.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&paths::config_file())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
