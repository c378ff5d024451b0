//! Session store configuration loaded from the environment.
//!
//! - `WITCHARD_MAX_SESSIONS`: cap on live sessions (unset = unlimited)
//! - `WITCHARD_RNG_SEED`: base seed making every created session deterministic

use std::env;
use std::str::FromStr;

use crate::error::AppError;

pub const MAX_SESSIONS_VAR: &str = "WITCHARD_MAX_SESSIONS";
pub const RNG_SEED_VAR: &str = "WITCHARD_RNG_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub max_sessions: Option<usize>,
    pub fixed_seed: Option<u64>,
}

impl StoreConfig {
    /// Read the store configuration from the environment.
    ///
    /// Missing or blank variables mean "unset"; anything that fails to parse
    /// is a configuration error rather than a silent default.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            max_sessions: read_var(MAX_SESSIONS_VAR)?,
            fixed_seed: read_var(RNG_SEED_VAR)?,
        })
    }

    pub fn with_max_sessions(mut self, max: usize) -> Self {
        self.max_sessions = Some(max);
        self
    }

    pub fn with_fixed_seed(mut self, seed: u64) -> Self {
        self.fixed_seed = Some(seed);
        self
    }
}

fn read_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|e| AppError::config(format!("Invalid {name}={trimmed:?}: {e}")))
}
