//! Summon costs and validation.

use super::ports::SummonPolicy;
use super::types::{Phase, PlayerSide, PlayerState, Rank};
use crate::core::constants::{DEFAULT_SUMMON_COST, SUMMON_COST_TABLE};
use thiserror::Error;

/// Energy cost of summoning a unit of `rank`.
pub fn summon_cost(rank: Rank) -> u32 {
    SUMMON_COST_TABLE
        .iter()
        .find(|(ordinal, _)| *ordinal == rank.ordinal())
        .map(|&(_, cost)| cost)
        .unwrap_or(DEFAULT_SUMMON_COST)
}

/// Why a summon request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummonRejection {
    /// The battle is not in progress
    #[error("Battle is not in progress")]
    WrongPhase,
    /// Summons are only allowed on the player's own turn
    #[error("It is not {player}'s turn")]
    NotYourTurn { player: PlayerSide },
    #[error("Not enough energy: have {have}, need {need}")]
    NotEnoughEnergy { have: u32, need: u32 },
    #[error("Roster is full (max {max})")]
    RosterFull { max: usize },
    /// The eligibility policy does not allow this rank right now
    #[error("Rank {rank} is not allowed")]
    RankNotAllowed { rank: Rank },
}

/// Everything a summon check looks at, borrowed from the engine.
pub(crate) struct SummonContext<'a> {
    pub phase: Phase,
    pub active_player: PlayerSide,
    pub max_roster_size: usize,
    pub policy: &'a dyn SummonPolicy,
}

/// Validate a summon without touching any state.
///
/// Checks run cheapest first; the eligibility policy is only consulted once
/// the engine's own rules pass.
pub(crate) fn check_summon(
    ctx: &SummonContext<'_>,
    player: PlayerSide,
    state: &PlayerState,
    rank: Rank,
) -> Result<(), SummonRejection> {
    if ctx.phase != Phase::InProgress {
        return Err(SummonRejection::WrongPhase);
    }
    if player != ctx.active_player {
        return Err(SummonRejection::NotYourTurn { player });
    }
    let need = summon_cost(rank);
    if state.energy < need {
        return Err(SummonRejection::NotEnoughEnergy {
            have: state.energy,
            need,
        });
    }
    if state.occupied_slots() >= ctx.max_roster_size {
        return Err(SummonRejection::RosterFull {
            max: ctx.max_roster_size,
        });
    }
    if !ctx.policy.is_rank_allowed(rank) {
        return Err(SummonRejection::RankNotAllowed { rank });
    }
    Ok(())
}
