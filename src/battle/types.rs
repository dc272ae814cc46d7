use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSide {
    Player1,
    Player2,
}

impl PlayerSide {
    pub const ALL: [PlayerSide; 2] = [PlayerSide::Player1, PlayerSide::Player2];

    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    /// Player id as used in results (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            Self::Player1 => 1,
            Self::Player2 => 2,
        }
    }

    /// Parse a player id (1 or 2).
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Player1),
            2 => Some(Self::Player2),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Player1 => 0,
            Self::Player2 => 1,
        }
    }
}

impl fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// Ordinal tier of a combatant. Higher ranks cost more and score more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const LOWEST: Rank = Rank(0);
    pub const HIGHEST_LISTED: Rank = Rank(4);

    pub fn ordinal(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Top-level battle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Before `start_battle`
    Idle,
    InProgress,
    /// Terminal; only `reset` leaves it
    Ended,
}

/// Placement token already validated by the board. The engine passes it
/// through to the execution collaborator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Engine-assigned identity of a summoned combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombatantId(pub u32);

/// Handle for an approved summon awaiting completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SummonTicket(pub u32);

/// A live summoned unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub owner: PlayerSide,
    pub rank: Rank,
    pub current_health: u32,
}

/// A summon the engine approved and is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingSummon {
    pub ticket: SummonTicket,
    pub owner: PlayerSide,
    pub rank: Rank,
}

/// Per-player economy and roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub energy: u32,
    pub roster: Vec<Combatant>,
    /// Approved summons not yet reported complete. They hold a roster slot.
    pub pending_summons: usize,
}

impl PlayerState {
    pub fn new(energy: u32) -> Self {
        Self {
            energy,
            roster: Vec::new(),
            pending_summons: 0,
        }
    }

    /// Roster slots in use, counting summons still being placed.
    pub fn occupied_slots(&self) -> usize {
        self.roster.len() + self.pending_summons
    }

    /// Add energy, clamped at `cap`. Returns true if energy changed.
    pub fn regenerate(&mut self, amount: u32, cap: u32) -> bool {
        let before = self.energy;
        self.energy = self.energy.saturating_add(amount).min(cap);
        self.energy != before
    }

    /// Spend energy. Returns false and leaves energy untouched when short.
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.energy.checked_sub(amount) {
            Some(rest) => {
                self.energy = rest;
                true
            }
            None => false,
        }
    }

    pub fn find(&self, id: CombatantId) -> Option<&Combatant> {
        self.roster.iter().find(|c| c.id == id)
    }

    /// Remove a combatant from the roster, returning it if present.
    pub fn remove(&mut self, id: CombatantId) -> Option<Combatant> {
        let index = self.roster.iter().position(|c| c.id == id)?;
        Some(self.roster.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(PlayerSide::Player1.opponent(), PlayerSide::Player2);
        assert_eq!(PlayerSide::Player2.opponent(), PlayerSide::Player1);
    }

    #[test]
    fn test_player_ids_round_trip() {
        for side in PlayerSide::ALL {
            assert_eq!(PlayerSide::from_id(side.id()), Some(side));
        }
        assert_eq!(PlayerSide::from_id(0), None);
        assert_eq!(PlayerSide::from_id(3), None);
    }

    #[test]
    fn test_regenerate_clamps_at_cap() {
        let mut state = PlayerState::new(90);
        assert!(state.regenerate(20, 100));
        assert_eq!(state.energy, 100);
        assert!(!state.regenerate(20, 100));
        assert_eq!(state.energy, 100);
    }

    #[test]
    fn test_spend_never_underflows() {
        let mut state = PlayerState::new(40);
        assert!(!state.spend(50));
        assert_eq!(state.energy, 40);
        assert!(state.spend(40));
        assert_eq!(state.energy, 0);
    }

    #[test]
    fn test_occupied_slots_counts_pending() {
        let mut state = PlayerState::new(100);
        state.pending_summons = 2;
        state.roster.push(Combatant {
            id: CombatantId(1),
            owner: PlayerSide::Player1,
            rank: Rank(1),
            current_health: 10,
        });
        assert_eq!(state.occupied_slots(), 3);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut state = PlayerState::new(100);
        assert!(state.remove(CombatantId(9)).is_none());
    }
}
