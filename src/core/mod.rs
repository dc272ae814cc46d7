//! Match configuration and balance constants.

pub mod config;
pub mod constants;

pub use config::{BattleConfig, ConfigError};
pub use constants::*;
