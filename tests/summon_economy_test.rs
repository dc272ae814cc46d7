//! Integration test: summon validation and the energy economy

use battle_engine::battle::{BattleEvent, MaxRank, SummonRejection};
use battle_engine::{BattleConfig, BattleEngine, PlayerSide, Position, Rank};

const P1: PlayerSide = PlayerSide::Player1;
const P2: PlayerSide = PlayerSide::Player2;

fn spot() -> Position {
    Position::new(1, 1)
}

fn started(config: BattleConfig) -> BattleEngine {
    let mut engine = BattleEngine::new(config);
    engine.start_battle();
    engine.take_events();
    engine
}

fn end_turn(engine: &mut BattleEngine) {
    let remaining = engine.turn_time_remaining();
    engine.tick(remaining);
}

// =============================================================================
// Energy
// =============================================================================

#[test]
fn test_insufficient_energy_rejects_without_side_effects() {
    let mut engine = started(BattleConfig::default());
    assert!(engine.request_summon(P1, Rank(2), spot())); // 100 -> 50
    assert!(engine.request_summon(P1, Rank(0), spot())); // 50 -> 40
    assert_eq!(engine.energy(P1), 40);
    engine.take_events();

    assert!(!engine.request_summon(P1, Rank(2), spot()));

    assert_eq!(engine.energy(P1), 40);
    assert_eq!(engine.player(P1).pending_summons, 2);
    assert!(engine.take_events().is_empty());
    assert_eq!(
        engine.check_summon(P1, Rank(2)),
        Err(SummonRejection::NotEnoughEnergy { have: 40, need: 50 })
    );
}

#[test]
fn test_exact_energy_is_enough() {
    let mut engine = started(BattleConfig::default());
    assert!(engine.request_summon(P1, Rank(4), spot()));
    assert_eq!(engine.energy(P1), 0);
    assert!(!engine.can_summon(P1, Rank(0)));
}

#[test]
fn test_energy_regen_is_clamped_to_cap() {
    let mut engine = started(BattleConfig::quick(10));
    assert!(engine.request_summon(P1, Rank(1), spot())); // 100 -> 75
    end_turn(&mut engine);
    end_turn(&mut engine); // P1 regenerates 20 -> 95
    assert_eq!(engine.energy(P1), 95);
    end_turn(&mut engine);
    end_turn(&mut engine); // 95 + 20 clamps at 100
    assert_eq!(engine.energy(P1), 100);
}

#[test]
fn test_energy_changed_event_follows_spend() {
    let mut engine = started(BattleConfig::default());
    let ticket = engine.try_request_summon(P1, Rank(3), spot()).unwrap();
    let events = engine.take_events();
    assert_eq!(
        events,
        vec![
            BattleEvent::EnergyChanged {
                player: P1,
                energy: 25
            },
            BattleEvent::SummonApproved {
                ticket,
                player: P1,
                rank: Rank(3),
                position: spot(),
            },
        ]
    );
}

// =============================================================================
// Turn Ownership
// =============================================================================

#[test]
fn test_only_active_player_may_summon() {
    let mut engine = started(BattleConfig::default());
    assert!(!engine.can_summon(P2, Rank(0)));
    end_turn(&mut engine);
    assert!(engine.can_summon(P2, Rank(0)));
    assert!(!engine.can_summon(P1, Rank(0)));
}

#[test]
fn test_summon_before_start_is_wrong_phase() {
    let engine = BattleEngine::new(BattleConfig::default());
    assert_eq!(
        engine.check_summon(P1, Rank(0)),
        Err(SummonRejection::WrongPhase)
    );
}

// =============================================================================
// Roster Capacity
// =============================================================================

#[test]
fn test_roster_limit_plus_one_is_rejected() {
    let config = BattleConfig {
        max_roster_size: 3,
        ..Default::default()
    };
    let mut engine = started(config);
    for _ in 0..3 {
        let ticket = engine.try_request_summon(P1, Rank(0), spot()).unwrap();
        engine.on_summon_completed(ticket, 10).unwrap();
    }
    assert_eq!(engine.roster(P1).len(), 3);
    assert_eq!(
        engine.try_request_summon(P1, Rank(0), spot()),
        Err(SummonRejection::RosterFull { max: 3 })
    );
    assert_eq!(engine.energy(P1), 70);
}

#[test]
fn test_death_frees_a_roster_slot() {
    let config = BattleConfig {
        max_roster_size: 2,
        ..Default::default()
    };
    let mut engine = started(config);
    let mut ids = Vec::new();
    for _ in 0..2 {
        let ticket = engine.try_request_summon(P1, Rank(0), spot()).unwrap();
        ids.push(engine.on_summon_completed(ticket, 10).unwrap());
    }
    assert!(!engine.can_summon(P1, Rank(0)));
    engine.report_death(ids[0]);
    assert!(engine.can_summon(P1, Rank(0)));
}

// =============================================================================
// Eligibility Policy
// =============================================================================

#[test]
fn test_policy_denial_is_a_plain_rejection() {
    let mut engine = BattleEngine::new(BattleConfig::default()).with_policy(MaxRank(Rank(1)));
    engine.start_battle();
    assert!(!engine.request_summon(P1, Rank(2), spot()));
    assert_eq!(engine.energy(P1), 100);
    assert_eq!(
        engine.check_summon(P1, Rank(2)),
        Err(SummonRejection::RankNotAllowed { rank: Rank(2) })
    );
    assert!(engine.request_summon(P1, Rank(1), spot()));
}

#[test]
fn test_can_summon_is_stable_without_state_change() {
    let engine = started(BattleConfig::default());
    for rank in 0..=6 {
        let first = engine.can_summon(P1, Rank(rank));
        let second = engine.can_summon(P1, Rank(rank));
        assert_eq!(first, second);
    }
}
