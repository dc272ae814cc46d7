//! Outbound notifications.
//!
//! The engine never calls back into the presentation or execution layers.
//! Every state change is recorded as a [`BattleEvent`] in the engine's outbox
//! and the host drains it with `BattleEngine::take_events` once the call that
//! produced it has returned.

use super::result::BattleResult;
use super::types::{Combatant, PlayerSide, Position, Rank, SummonTicket};

/// A single event produced by the battle engine, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted,

    /// The match reached its terminal phase. Emitted exactly once.
    BattleEnded { result: BattleResult },

    /// A player's turn began and their timer was reset.
    TurnStarted { turn: u32, player: PlayerSide },

    /// A player's turn ran out.
    TurnEnded { turn: u32, player: PlayerSide },

    /// Energy changed through regeneration or spending.
    EnergyChanged { player: PlayerSide, energy: u32 },

    /// A summon passed validation and was paid for. The execution layer
    /// places the unit and answers with `on_summon_completed(ticket, ..)`.
    SummonApproved {
        ticket: SummonTicket,
        player: PlayerSide,
        rank: Rank,
        position: Position,
    },

    /// A placed unit joined its owner's roster.
    AnimalSummoned { combatant: Combatant },

    /// A unit was removed from its owner's roster.
    AnimalDeath { combatant: Combatant },
}
