//! Simulation configuration.

use crate::core::config::BattleConfig;
use crate::core::constants::TICK_INTERVAL_MS;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of matches to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Rules every simulated match is played under
    pub battle: BattleConfig,

    /// Seconds of game time per tick
    pub tick_seconds: f64,

    /// Maximum ticks per match before it is abandoned
    pub max_ticks_per_run: u64,

    /// Chance per tick that the active player attempts a summon
    pub summon_chance: f64,

    /// Ticks between a summon being approved and its placement completing
    pub completion_delay_ticks: u64,

    /// Chance per tick that some live combatant takes a hit
    pub damage_chance: f64,

    /// Chance per tick that some live combatant dies
    pub death_chance: f64,

    /// Chance per tick that the active player gives up
    pub forfeit_chance: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per match)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            battle: BattleConfig::default(),
            tick_seconds: TICK_INTERVAL_MS as f64 / 1000.0,
            max_ticks_per_run: 100_000,
            summon_chance: 0.05,
            completion_delay_ticks: 5,
            damage_chance: 0.02,
            death_chance: 0.005,
            forfeit_chance: 0.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Fast config for smoke testing
    pub fn quick(num_runs: u32) -> Self {
        Self {
            num_runs,
            battle: BattleConfig::quick(3),
            tick_seconds: 0.5,
            ..Default::default()
        }
    }

    /// Heavy attrition: lots of deaths, so rosters get wiped often
    pub fn bloodbath() -> Self {
        Self {
            num_runs: 200,
            summon_chance: 0.1,
            damage_chance: 0.1,
            death_chance: 0.05,
            ..Default::default()
        }
    }
}
