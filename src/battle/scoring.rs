use super::result::DRAW;
use super::types::{PlayerSide, PlayerState};
use crate::core::constants::SCORE_PER_RANK;

/// Score of a roster: each live combatant is worth its health plus
/// `SCORE_PER_RANK` per rank ordinal.
pub fn score(state: &PlayerState) -> u32 {
    state
        .roster
        .iter()
        .map(|c| {
            c.current_health
                .saturating_add(u32::from(c.rank.ordinal()) * SCORE_PER_RANK)
        })
        .fold(0u32, u32::saturating_add)
}

/// Winner id by strictly higher score, `DRAW` on a tie.
pub fn winner_by_score(player1_score: u32, player2_score: u32) -> u8 {
    match player1_score.cmp(&player2_score) {
        std::cmp::Ordering::Greater => PlayerSide::Player1.id(),
        std::cmp::Ordering::Less => PlayerSide::Player2.id(),
        std::cmp::Ordering::Equal => DRAW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::types::{Combatant, CombatantId, Rank};

    fn unit(id: u32, rank: u8, health: u32) -> Combatant {
        Combatant {
            id: CombatantId(id),
            owner: PlayerSide::Player1,
            rank: Rank(rank),
            current_health: health,
        }
    }

    #[test]
    fn test_empty_roster_scores_zero() {
        assert_eq!(score(&PlayerState::new(100)), 0);
    }

    #[test]
    fn test_score_sums_health_and_rank_weight() {
        let mut state = PlayerState::new(0);
        state.roster.push(unit(1, 1, 50));
        state.roster.push(unit(2, 0, 30));
        assert_eq!(score(&state), 150 + 30);
    }

    #[test]
    fn test_winner_by_score() {
        assert_eq!(winner_by_score(150, 100), 1);
        assert_eq!(winner_by_score(99, 100), 2);
        assert_eq!(winner_by_score(100, 100), DRAW);
    }
}
