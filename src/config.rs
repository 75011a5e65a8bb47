//! Runner configuration from `BLOCKFALL_*` environment variables.
//!
//! Every variable is optional; unset or unparseable values fall back to the
//! defaults.

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for the piece generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Input poll / redraw interval.
    pub frame_ms: u64,
    /// Log file. Logging is off when unset.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// Start a game right away instead of waiting for Enter.
    pub autostart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS as u64,
            log_path: None,
            log_level: LevelFilter::Info,
            autostart: false,
        }
    }
}

impl Config {
    pub const MIN_FRAME_MS: u64 = 1;
    pub const MAX_FRAME_MS: u64 = 1000;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());
        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|ms| ms.clamp(Self::MIN_FRAME_MS, Self::MAX_FRAME_MS))
            .unwrap_or(defaults.frame_ms);
        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let log_level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);
        let autostart = lookup("BLOCKFALL_AUTOSTART")
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.autostart);

        Self {
            seed,
            frame_ms,
            log_path,
            log_level,
            autostart,
        }
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
