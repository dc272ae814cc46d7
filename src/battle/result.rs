use serde::{Deserialize, Serialize};

use super::types::PlayerSide;

/// Winner id stored in results: 0 for a draw.
pub const DRAW: u8 = 0;

/// Final record of a match. Produced once, never mutated.
///
/// Field names and types are the storage format; keep them stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    /// 0 = draw, otherwise the winning player's id
    pub winner: u8,
    pub turns_played: u32,
    pub player1_score: u32,
    pub player2_score: u32,
    /// Unix seconds
    pub timestamp: i64,
}

impl BattleResult {
    /// The winning side, or None for a draw.
    pub fn winning_side(&self) -> Option<PlayerSide> {
        PlayerSide::from_id(self.winner)
    }

    pub fn is_draw(&self) -> bool {
        self.winner == DRAW
    }
}

/// Why a match ended. Only used for logging and simulator statistics;
/// the stored result does not carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    TurnLimit,
    RosterWiped { loser: PlayerSide },
    Forfeit { loser: PlayerSide },
}
