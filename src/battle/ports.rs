//! Collaborators the engine talks to synchronously.
//!
//! All of them are handed plain data. None of them can reach the engine, so a
//! collaborator can never re-enter it mid-transition.

use super::result::BattleResult;
use super::types::{Combatant, Rank};
use std::io;

/// External authority deciding which ranks may be summoned (game-mode rules).
pub trait SummonPolicy {
    fn is_rank_allowed(&self, rank: Rank) -> bool;
}

/// Allows every rank.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl SummonPolicy for AllowAll {
    fn is_rank_allowed(&self, _rank: Rank) -> bool {
        true
    }
}

/// Allows ranks up to and including the given one.
#[derive(Debug, Clone, Copy)]
pub struct MaxRank(pub Rank);

impl SummonPolicy for MaxRank {
    fn is_rank_allowed(&self, rank: Rank) -> bool {
        rank <= self.0
    }
}

impl<F> SummonPolicy for F
where
    F: Fn(Rank) -> bool,
{
    fn is_rank_allowed(&self, rank: Rank) -> bool {
        self(rank)
    }
}

/// Per-combatant turn callbacks. Combatant behavior lives outside the engine;
/// these are its only two entry points.
pub trait CombatantHooks {
    fn turn_started(&mut self, combatant: &Combatant, turn: u32);
    fn turn_ended(&mut self, combatant: &Combatant, turn: u32);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl CombatantHooks for NoHooks {
    fn turn_started(&mut self, _combatant: &Combatant, _turn: u32) {}
    fn turn_ended(&mut self, _combatant: &Combatant, _turn: u32) {}
}

/// Receives the final result of each match (persistence).
///
/// A failing sink is logged by the engine; the match outcome stands.
pub trait ResultSink {
    fn record(&mut self, result: &BattleResult) -> io::Result<()>;
}

/// Drops results. Used when nothing needs to be stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardResults;

impl ResultSink for DiscardResults {
    fn record(&mut self, _result: &BattleResult) -> io::Result<()> {
        Ok(())
    }
}
