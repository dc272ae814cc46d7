//! Per-match statistics collected by the runner.

use crate::battle::result::EndReason;
use crate::battle::summon::SummonRejection;
use serde::Serialize;

/// Rejected summon attempts by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RejectionCounts {
    pub wrong_phase: u64,
    pub not_your_turn: u64,
    pub not_enough_energy: u64,
    pub roster_full: u64,
    pub rank_not_allowed: u64,
}

impl RejectionCounts {
    pub fn record(&mut self, rejection: SummonRejection) {
        match rejection {
            SummonRejection::WrongPhase => self.wrong_phase += 1,
            SummonRejection::NotYourTurn { .. } => self.not_your_turn += 1,
            SummonRejection::NotEnoughEnergy { .. } => self.not_enough_energy += 1,
            SummonRejection::RosterFull { .. } => self.roster_full += 1,
            SummonRejection::RankNotAllowed { .. } => self.rank_not_allowed += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.wrong_phase
            + self.not_your_turn
            + self.not_enough_energy
            + self.roster_full
            + self.rank_not_allowed
    }

    pub fn add(&mut self, other: &RejectionCounts) {
        self.wrong_phase += other.wrong_phase;
        self.not_your_turn += other.not_your_turn;
        self.not_enough_energy += other.not_enough_energy;
        self.roster_full += other.roster_full;
        self.rank_not_allowed += other.rank_not_allowed;
    }
}

/// Outcome and counters of one simulated match.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Winner id (0 = draw), None if the match was abandoned
    pub winner: Option<u8>,
    pub end_reason: Option<EndReason>,
    pub turns_played: u32,
    pub total_ticks: u64,
    pub summons_approved: u64,
    pub summons_completed: u64,
    pub deaths: u64,
    pub rejections: RejectionCounts,
    pub player1_score: u32,
    pub player2_score: u32,
}

impl RunStats {
    pub fn timed_out(&self) -> bool {
        self.winner.is_none()
    }
}
