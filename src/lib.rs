//! Battle Engine - two-player turn-based summoning battles
//!
//! This crate exposes the match authority (`battle`), its configuration
//! (`core`), result persistence (`persistence`) and a Monte Carlo match
//! simulator (`simulator`).

pub mod battle;
pub mod core;
pub mod persistence;
pub mod simulator;

pub use crate::battle::{BattleEngine, BattleEvent, BattleResult, PlayerSide, Position, Rank};
pub use crate::core::{BattleConfig, ConfigError, TICK_INTERVAL_MS};
pub use crate::persistence::ResultStore;
