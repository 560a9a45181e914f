//!
//! sentinel console configuration
//! ------------------------------
//! Defaults, environment overrides and flag overrides for the console. Flags win over
//! environment, environment wins over defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_STATE_DIR: &str = "SENTINEL_STATE_DIR";
pub const ENV_SIGNIN_LATENCY_MS: &str = "SENTINEL_SIGNIN_LATENCY_MS";

pub const DEFAULT_STATE_DIR: &str = ".sentinel";
pub const DEFAULT_SIGNIN_LATENCY_MS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Folder holding the persisted identity slot.
    pub state_dir: PathBuf,
    /// Artificial delay applied to every sign-in attempt.
    pub sign_in_latency: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            sign_in_latency: Duration::from_millis(DEFAULT_SIGNIN_LATENCY_MS),
        }
    }
}

fn parse_u64_env(name: &str) -> Option<u64> {
    match env::var(name) {
        Ok(val) => val.trim().parse::<u64>().ok(),
        Err(_) => None,
    }
}

impl ConsoleConfig {
    /// Defaults overlaid with `SENTINEL_*` environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(dir) = env::var(ENV_STATE_DIR) {
            if !dir.trim().is_empty() { cfg.state_dir = PathBuf::from(dir); }
        }
        if let Some(ms) = parse_u64_env(ENV_SIGNIN_LATENCY_MS) {
            cfg.sign_in_latency = Duration::from_millis(ms);
        }
        cfg
    }

    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = dir.into();
        self
    }

    pub fn with_sign_in_latency(mut self, latency: Duration) -> Self {
        self.sign_in_latency = latency;
        self
    }
}
