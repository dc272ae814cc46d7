//! Integration test: finished matches are handed to the result store

use battle_engine::persistence::ResultStore;
use battle_engine::{BattleConfig, BattleEngine, PlayerSide};

#[test]
fn test_engine_records_result_in_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let mut engine = BattleEngine::new(BattleConfig::quick(1))
        .with_result_sink(ResultStore::new(&path))
        .with_clock(|| 1_234);
    engine.start_battle();
    engine.forfeit(PlayerSide::Player1);

    let stored = ResultStore::new(&path).load_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(&stored[0], engine.result().unwrap());
    assert_eq!(stored[0].winner, 2);
    assert_eq!(stored[0].timestamp, 1_234);
}

#[test]
fn test_history_accumulates_across_matches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history").join("results.json");

    let mut engine =
        BattleEngine::new(BattleConfig::quick(1)).with_result_sink(ResultStore::new(&path));
    for loser in [PlayerSide::Player1, PlayerSide::Player2, PlayerSide::Player1] {
        engine.reset();
        engine.start_battle();
        engine.forfeit(loser);
    }

    let winners: Vec<u8> = ResultStore::new(&path)
        .load_all()
        .unwrap()
        .iter()
        .map(|r| r.winner)
        .collect();
    assert_eq!(winners, vec![2, 1, 2]);
}

#[test]
fn test_unwritable_store_does_not_block_match_end() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes every write fail
    let path = dir.path().join("results.json");
    std::fs::create_dir_all(&path).unwrap();

    let mut engine =
        BattleEngine::new(BattleConfig::default()).with_result_sink(ResultStore::new(&path));
    engine.start_battle();
    assert!(engine.forfeit(PlayerSide::Player2));
    assert!(engine.is_over());
    assert_eq!(engine.result().unwrap().winner, 1);
}
