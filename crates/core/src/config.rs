//! Game configuration from environment variables.
//!
//! - `HANGMAN_LIVES`: starting lives (default 6)
//! - `HANGMAN_TIME_LIMIT_SECS`: seconds per guess (default 15)
//! - `HANGMAN_LOG_PATH`: append logs to this file (default: unset)
//!
//! Unset variables fall back to their defaults. A variable that is set but is
//! not a positive integer is rejected.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::types::{DEFAULT_LIVES, TIME_LIMIT_SECS};

pub const LIVES_VAR: &str = "HANGMAN_LIVES";
pub const TIME_LIMIT_VAR: &str = "HANGMAN_TIME_LIMIT_SECS";
pub const LOG_PATH_VAR: &str = "HANGMAN_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub lives: u32,
    pub time_limit: Duration,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lives: DEFAULT_LIVES,
            time_limit: Duration::from_secs(TIME_LIMIT_SECS),
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable source (the process environment in
    /// [`from_env`](GameConfig::from_env), a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let lives = match lookup(LIVES_VAR) {
            Some(raw) => parse_positive(LIVES_VAR, &raw)?,
            None => defaults.lives,
        };

        let time_limit = match lookup(TIME_LIMIT_VAR) {
            Some(raw) => Duration::from_secs(u64::from(parse_positive(TIME_LIMIT_VAR, &raw)?)),
            None => defaults.time_limit,
        };

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Ok(Self {
            lives,
            time_limit,
            log_path,
        })
    }

    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = GameConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.lives, 6);
        assert_eq!(config.time_limit, Duration::from_secs(15));
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn reads_all_variables() {
        let config = GameConfig::from_lookup(lookup_from(&[
            (LIVES_VAR, "8"),
            (TIME_LIMIT_VAR, " 30 "),
            (LOG_PATH_VAR, "/tmp/hangman.log"),
        ]))
        .unwrap();

        assert_eq!(config.lives, 8);
        assert_eq!(config.time_limit, Duration::from_secs(30));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/hangman.log")));
    }

    #[test]
    fn blank_log_path_is_unset() {
        let config = GameConfig::from_lookup(lookup_from(&[(LOG_PATH_VAR, "   ")])).unwrap();
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        let err = GameConfig::from_lookup(lookup_from(&[(LIVES_VAR, "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: LIVES_VAR,
                value: "0".into()
            }
        );

        let err = GameConfig::from_lookup(lookup_from(&[(TIME_LIMIT_VAR, "soon")])).unwrap_err();
        assert!(err.to_string().contains(TIME_LIMIT_VAR));
    }
}
