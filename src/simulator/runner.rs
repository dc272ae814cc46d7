//! Main simulation runner.
//!
//! Each match drives a real `BattleEngine` with random agents standing in
//! for the players, the execution layer (delayed summon completions) and
//! the combat layer (damage and deaths). Statistics are collected from the
//! engine's events.

use super::config::SimConfig;
use super::report::SimReport;
use super::stats::RunStats;
use crate::battle::engine::BattleEngine;
use crate::battle::events::BattleEvent;
use crate::battle::types::{CombatantId, PlayerSide, Position, Rank, SummonTicket};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                of = config.num_runs,
                winner = ?run_stats.winner,
                reason = ?run_stats.end_reason,
                turns = run_stats.turns_played,
                summons = run_stats.summons_completed,
                deaths = run_stats.deaths,
                "Match finished"
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.max_ticks_per_run)
}

/// Play one match to completion (or until `max_ticks_per_run`).
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut engine = BattleEngine::new(config.battle.clone());
    let mut stats = RunStats::default();
    // Approved summons waiting for the execution layer: (ticket, due tick)
    let mut placements: Vec<(SummonTicket, u64)> = Vec::new();

    engine.start_battle();
    engine.take_events();

    while !engine.is_over() && stats.total_ticks < config.max_ticks_per_run {
        let now = stats.total_ticks;

        complete_due_placements(&mut engine, &mut placements, now, rng);

        let player = engine.active_player();
        if rng.gen_bool(config.summon_chance.clamp(0.0, 1.0)) {
            let ordinal = rng.gen_range(Rank::LOWEST.ordinal()..=Rank::HIGHEST_LISTED.ordinal());
            let rank = Rank(ordinal);
            let position = random_position(player, rng);
            if let Err(rejection) = engine.try_request_summon(player, rank, position) {
                stats.rejections.record(rejection);
            }
        }

        if rng.gen_bool(config.damage_chance.clamp(0.0, 1.0)) {
            if let Some((id, health)) = random_combatant(&engine, rng) {
                let hit = rng.gen_range(1..=25);
                engine.report_health(id, health.saturating_sub(hit));
            }
        }

        if rng.gen_bool(config.death_chance.clamp(0.0, 1.0)) {
            if let Some((id, _)) = random_combatant(&engine, rng) {
                engine.report_death(id);
            }
        }

        if rng.gen_bool(config.forfeit_chance.clamp(0.0, 1.0)) {
            engine.forfeit(player);
        }

        engine.tick(config.tick_seconds);
        stats.total_ticks += 1;

        for event in engine.take_events() {
            process_event(&mut stats, &mut placements, event, now + config.completion_delay_ticks);
        }
    }

    stats.turns_played = engine.current_turn().min(config.battle.max_turns);
    stats.end_reason = engine.end_reason();
    if let Some(result) = engine.result() {
        stats.winner = Some(result.winner);
        stats.turns_played = result.turns_played;
        stats.player1_score = result.player1_score;
        stats.player2_score = result.player2_score;
    }
    stats
}

/// Update counters from one engine event.
fn process_event(
    stats: &mut RunStats,
    placements: &mut Vec<(SummonTicket, u64)>,
    event: BattleEvent,
    due: u64,
) {
    match event {
        BattleEvent::SummonApproved { ticket, .. } => {
            stats.summons_approved += 1;
            placements.push((ticket, due));
        }
        BattleEvent::AnimalSummoned { .. } => stats.summons_completed += 1,
        BattleEvent::AnimalDeath { .. } => stats.deaths += 1,
        _ => {}
    }
}

fn complete_due_placements(
    engine: &mut BattleEngine,
    placements: &mut Vec<(SummonTicket, u64)>,
    now: u64,
    rng: &mut impl Rng,
) {
    let (due, waiting): (Vec<_>, Vec<_>) = placements.drain(..).partition(|(_, at)| *at <= now);
    *placements = waiting;
    for (ticket, _) in due {
        engine.on_summon_completed(ticket, rng.gen_range(20..=100));
    }
}

/// Player 1 places in the upper half of the board, player 2 in the lower.
fn random_position(player: PlayerSide, rng: &mut impl Rng) -> Position {
    let x = rng.gen_range(-4..=4);
    let y = rng.gen_range(1..=4);
    match player {
        PlayerSide::Player1 => Position::new(x, y),
        PlayerSide::Player2 => Position::new(x, -y),
    }
}

fn random_combatant(engine: &BattleEngine, rng: &mut impl Rng) -> Option<(CombatantId, u32)> {
    let all: Vec<(CombatantId, u32)> = PlayerSide::ALL
        .iter()
        .flat_map(|side| engine.roster(*side))
        .map(|c| (c.id, c.current_health))
        .collect();
    all.choose(rng).copied()
}
