//! Turn-based battle engine: match state machine, summon economy and scoring.

pub mod engine;
pub mod events;
pub mod ports;
pub mod result;
pub mod scoring;
pub mod summon;
pub mod types;

pub use engine::BattleEngine;
pub use events::BattleEvent;
pub use ports::{
    AllowAll, CombatantHooks, DiscardResults, MaxRank, NoHooks, ResultSink, SummonPolicy,
};
pub use result::{BattleResult, EndReason, DRAW};
pub use scoring::{score, winner_by_score};
pub use summon::{summon_cost, SummonRejection};
pub use types::*;
