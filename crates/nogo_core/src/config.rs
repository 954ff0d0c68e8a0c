//! Engine configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::solver::MoveOrder;
use crate::types::MAX_BOARD_SIZE;

/// How the solver orders candidate moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrderKind {
    #[default]
    Natural,
    Shuffled,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub board_size: usize,
    /// Per-move budget in seconds; absent means the solve always completes.
    pub time_limit_secs: Option<f64>,
    /// Seeds the fallback RNG and shuffled ordering.
    pub seed: Option<u64>,
    pub move_order: MoveOrderKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: 7,
            time_limit_secs: None,
            seed: None,
            move_order: MoveOrderKind::Natural,
        }
    }
}

impl EngineConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Invalid(format!(
                "board_size must be in 1..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if let Some(t) = self.time_limit_secs
            && Duration::try_from_secs_f64(t).is_err()
        {
            return Err(ConfigError::Invalid(format!(
                "time_limit_secs must be a non-negative duration, got {t}"
            )));
        }
        Ok(())
    }

    /// Values that do not fit a `Duration` count as no limit; `validate`
    /// rejects them up front.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs
            .and_then(|t| Duration::try_from_secs_f64(t).ok())
    }

    /// Solver ordering; shuffling without a seed uses seed 0.
    pub fn solver_order(&self) -> MoveOrder {
        match self.move_order {
            MoveOrderKind::Natural => MoveOrder::Natural,
            MoveOrderKind::Shuffled => MoveOrder::Shuffled {
                seed: self.seed.unwrap_or(0),
            },
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
