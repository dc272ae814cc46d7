//! Property tests: engine invariants under arbitrary action sequences

use battle_engine::battle::{BattleEvent, Phase, SummonTicket};
use battle_engine::{BattleConfig, BattleEngine, PlayerSide, Position, Rank};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Tick(f64),
    Summon { player: u8, rank: u8 },
    Complete { index: usize, health: u32 },
    Death { index: usize },
    Forfeit { player: u8 },
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0.0f64..4.0).prop_map(Action::Tick),
        4 => (1u8..=2, 0u8..=6).prop_map(|(player, rank)| Action::Summon { player, rank }),
        3 => (0usize..16, 0u32..200).prop_map(|(index, health)| Action::Complete { index, health }),
        2 => (0usize..16).prop_map(|index| Action::Death { index }),
        1 => (1u8..=2).prop_map(|player| Action::Forfeit { player }),
    ]
}

fn side(id: u8) -> PlayerSide {
    PlayerSide::from_id(id).unwrap_or(PlayerSide::Player1)
}

proptest! {
    #[test]
    fn engine_invariants_hold(actions in prop::collection::vec(action(), 1..200)) {
        let config = BattleConfig { max_roster_size: 3, ..BattleConfig::quick(4) };
        let max_roster = config.max_roster_size;
        let mut engine = BattleEngine::new(config);
        engine.start_battle();

        let mut tickets: Vec<SummonTicket> = Vec::new();
        let mut last_turn = engine.current_turn();
        let mut ended_count = 0;

        for action in actions {
            match action {
                Action::Tick(dt) => engine.tick(dt),
                Action::Summon { player, rank } => {
                    let before = engine.energy(side(player));
                    let allowed = engine.can_summon(side(player), Rank(rank));
                    let accepted =
                        engine.request_summon(side(player), Rank(rank), Position::new(0, 1));
                    prop_assert_eq!(allowed, accepted);
                    if !accepted {
                        prop_assert_eq!(engine.energy(side(player)), before);
                    }
                }
                Action::Complete { index, health } => {
                    if let Some(ticket) = tickets.get(index).copied() {
                        engine.on_summon_completed(ticket, health);
                    }
                }
                Action::Death { index } => {
                    let ids: Vec<_> = PlayerSide::ALL
                        .iter()
                        .flat_map(|s| engine.roster(*s).iter().map(|c| c.id))
                        .collect();
                    if let Some(id) = ids.get(index).copied() {
                        engine.report_death(id);
                    }
                }
                Action::Forfeit { player } => {
                    engine.forfeit(side(player));
                }
            }

            for event in engine.take_events() {
                match event {
                    BattleEvent::SummonApproved { ticket, .. } => tickets.push(ticket),
                    BattleEvent::BattleEnded { .. } => ended_count += 1,
                    _ => {}
                }
            }

            for player in PlayerSide::ALL {
                let state = engine.player(player);
                prop_assert!(state.energy <= 100);
                prop_assert!(state.roster.len() <= max_roster);
                prop_assert!(state.occupied_slots() <= max_roster);
            }
            prop_assert!(engine.current_turn() >= last_turn);
            prop_assert!(engine.turn_time_remaining() >= 0.0);
            prop_assert!(engine.turn_time_remaining() <= engine.config().turn_duration_secs);
            last_turn = engine.current_turn();
            prop_assert!(ended_count <= 1);
            prop_assert_eq!(engine.phase() == Phase::Ended, ended_count == 1);
        }
    }

    #[test]
    fn wipe_always_hands_win_to_other_side(loser in 1u8..=2, turns_before in 0usize..5) {
        let mut engine = BattleEngine::new(BattleConfig::quick(10));
        engine.start_battle();
        for _ in 0..turns_before {
            let remaining = engine.turn_time_remaining();
            engine.tick(remaining);
        }
        let loser = side(loser);
        while engine.active_player() != loser {
            let remaining = engine.turn_time_remaining();
            engine.tick(remaining);
        }
        let ticket = engine
            .try_request_summon(loser, Rank(0), Position::new(0, 0))
            .unwrap();
        let id = engine.on_summon_completed(ticket, 5).unwrap();
        engine.report_death(id);

        prop_assert!(engine.is_over());
        prop_assert_eq!(engine.result().unwrap().winner, loser.opponent().id());
    }
}
