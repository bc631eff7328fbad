use std::{env, str::FromStr, time::Duration};

use log::debug;
use thiserror::Error;

use crate::time::{DEFAULT_MOVE_DELAY, DEFAULT_MOVE_DELAY_MS};

// Odd so that rooms sit on odd coordinates with the border on both sides.
pub const DEFAULT_ROWS: usize = 31;
pub const DEFAULT_COLS: usize = 31;
pub const DEFAULT_LEVELS: usize = 5;

pub const ROWS_VAR: &str = "MAZE_ROWS";
pub const COLS_VAR: &str = "MAZE_COLS";
pub const LEVELS_VAR: &str = "MAZE_LEVELS";
pub const MOVE_DELAY_VAR: &str = "MAZE_MOVE_DELAY_MS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    Parse { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub levels: usize,
    pub move_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            levels: DEFAULT_LEVELS,
            move_delay: DEFAULT_MOVE_DELAY,
        }
    }
}

impl GameConfig {
    /// Reads settings from the environment, after loading a `.env` file if there is one.
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("loaded environment from {}", path.display());
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            rows: parse_var(&lookup, ROWS_VAR, defaults.rows)?,
            cols: parse_var(&lookup, COLS_VAR, defaults.cols)?,
            levels: parse_var(&lookup, LEVELS_VAR, defaults.levels)?,
            move_delay: Duration::from_millis(parse_var(
                &lookup,
                MOVE_DELAY_VAR,
                DEFAULT_MOVE_DELAY_MS,
            )?),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { name, value }),
    }
}
