//! Match configuration.
//!
//! A `BattleConfig` describes the rules a single match is played under:
//! turn limit, turn length, roster capacity and the energy economy. It can be
//! built in code or loaded from a JSON file.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading or validating a [`BattleConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for a `BattleConfig`
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A match needs at least one turn
    #[error("max_turns must be at least 1")]
    ZeroTurns,
    /// Turn duration must be a positive, finite number of seconds
    #[error("turn_duration_secs must be positive and finite, got {0}")]
    InvalidTurnDuration(f64),
    /// A roster needs room for at least one combatant
    #[error("max_roster_size must be at least 1")]
    ZeroRosterSize,
    /// Energy cap must be at least 1
    #[error("energy_cap must be at least 1")]
    ZeroEnergyCap,
    /// The cap cannot exceed the hard energy ceiling
    #[error("energy_cap {cap} exceeds the maximum of {max}")]
    EnergyCapTooHigh { cap: u32, max: u32 },
    /// Starting energy cannot exceed the cap
    #[error("starting_energy {starting} exceeds energy_cap {cap}")]
    StartingEnergyAboveCap { starting: u32, cap: u32 },
}

/// Rules for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Number of full rounds (player 1 then player 2) before scoring decides
    pub max_turns: u32,
    /// Seconds each player gets per turn
    pub turn_duration_secs: f64,
    /// Maximum live combatants per player
    pub max_roster_size: usize,
    pub starting_energy: u32,
    pub energy_cap: u32,
    /// Energy gained at the start of each of the player's turns
    pub energy_regen: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            turn_duration_secs: DEFAULT_TURN_DURATION_SECONDS,
            max_roster_size: DEFAULT_MAX_ROSTER_SIZE,
            starting_energy: STARTING_ENERGY,
            energy_cap: ENERGY_CAP,
            energy_regen: ENERGY_REGEN_PER_TURN,
        }
    }
}

impl BattleConfig {
    /// Short matches for tests and quick simulations.
    pub fn quick(max_turns: u32) -> Self {
        Self {
            max_turns,
            turn_duration_secs: 5.0,
            ..Default::default()
        }
    }

    /// Load and validate a config from a JSON file. Missing fields fall back
    /// to their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config describes a playable match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        if !self.turn_duration_secs.is_finite() || self.turn_duration_secs <= 0.0 {
            return Err(ConfigError::InvalidTurnDuration(self.turn_duration_secs));
        }
        if self.max_roster_size == 0 {
            return Err(ConfigError::ZeroRosterSize);
        }
        if self.energy_cap == 0 {
            return Err(ConfigError::ZeroEnergyCap);
        }
        if self.energy_cap > ENERGY_CAP {
            return Err(ConfigError::EnergyCapTooHigh {
                cap: self.energy_cap,
                max: ENERGY_CAP,
            });
        }
        if self.starting_energy > self.energy_cap {
            return Err(ConfigError::StartingEnergyAboveCap {
                starting: self.starting_energy,
                cap: self.energy_cap,
            });
        }
        Ok(())
    }
}
