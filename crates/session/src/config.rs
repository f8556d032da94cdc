use std::time::Duration;

use crate::types::{FRAMES_PER_SECOND, QUICK_TURN_MS, STANDARD_TURN_MS};

/// Session timing and seeding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub frames_per_second: u32,
    pub standard_turn: Duration,
    pub quick_turn: Duration,
    /// Fixed seed for reproducible runs; episode `n` is seeded with `seed + n`.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frames_per_second: FRAMES_PER_SECOND,
            standard_turn: Duration::from_millis(STANDARD_TURN_MS as u64),
            quick_turn: Duration::from_millis(QUICK_TURN_MS as u64),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables, falling back to defaults on
    /// missing or unparsable values.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`SessionConfig::from_env`] with a custom variable lookup.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let frames_per_second = var("BLOCKFALL_FPS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|fps| *fps > 0)
            .unwrap_or(defaults.frames_per_second);

        let standard_turn = var("BLOCKFALL_TURN_MS")
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.standard_turn);

        let quick_turn = var("BLOCKFALL_QUICK_TURN_MS")
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.quick_turn);

        let seed = var("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        Self {
            frames_per_second,
            standard_turn,
            quick_turn,
            seed,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_configuration() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.frames_per_second, 60);
        assert_eq!(cfg.standard_turn, Duration::from_millis(600));
        assert_eq!(cfg.quick_turn, Duration::from_millis(100));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn from_vars_reads_overrides_and_ignores_garbage() {
        let cfg = SessionConfig::from_vars(|name| match name {
            "BLOCKFALL_FPS" => Some("0".to_string()),
            "BLOCKFALL_TURN_MS" => Some(" 450 ".to_string()),
            "BLOCKFALL_QUICK_TURN_MS" => Some("fast".to_string()),
            "BLOCKFALL_SEED" => Some("42".to_string()),
            _ => None,
        });
        assert_eq!(cfg.frames_per_second, 60);
        assert_eq!(cfg.standard_turn, Duration::from_millis(450));
        assert_eq!(cfg.quick_turn, Duration::from_millis(100));
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn frame_duration_is_one_sixtieth() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.frame_duration(), Duration::from_nanos(16_666_666));
    }
}
