//! Application configuration from `BLOCKFALL_*` environment variables.
//!
//! Unset or unparsable values fall back to the defaults. Nothing is logged
//! here because the logger is configured from the result.

use std::path::PathBuf;

use log::LevelFilter;

use crate::session::SessionConfig;
use crate::types::DEFAULT_MUSIC_VOLUME;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub session: SessionConfig,
    /// Directory of background music; `None` plays nothing.
    pub music_dir: Option<PathBuf>,
    pub music_volume: f32,
    /// Log file; `None` disables logging.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            music_dir: None,
            music_volume: DEFAULT_MUSIC_VOLUME,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let session = SessionConfig::from_vars(&var);

        let music_dir = non_empty_path(var("BLOCKFALL_MUSIC_DIR"));

        let music_volume = var("BLOCKFALL_MUSIC_VOLUME")
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|v| (0.0..=1.0).contains(v))
            .unwrap_or(defaults.music_volume);

        let log_path = non_empty_path(var("BLOCKFALL_LOG_PATH"));

        let log_level = var("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            session,
            music_dir,
            music_volume,
            log_path,
            log_level,
        }
    }
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
}
