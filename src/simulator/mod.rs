//! Match simulator for Monte Carlo balance analysis.
//!
//! Plays thousands of randomized matches to analyze:
//! - Win rates per seat and how matches end
//! - How often summons are rejected and why
//! - Match length and final scores
//!
//! Every match is driven through a real `BattleEngine`, so results reflect
//! the actual rules.

mod config;
mod report;
mod runner;
mod stats;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run};
pub use stats::{RejectionCounts, RunStats};
