//! The battle engine: owns all match state and advances it.
//!
//! `BattleEngine` is a deterministic state machine driven by two kinds of
//! input:
//!
//! 1. **Time** - `tick(delta_seconds)` from the host loop counts down the
//!    active player's turn. A turn only ends when its timer runs out.
//!
//! 2. **Actions** - summon requests, forfeits, and reports from the
//!    execution layer (`on_summon_completed`, `report_death`,
//!    `report_health`).
//!
//! Rejected or out-of-phase actions are plain `false`/no-op outcomes. Every
//! state change is recorded as a [`BattleEvent`]; the host drains them with
//! [`BattleEngine::take_events`].

use super::events::BattleEvent;
use super::ports::{
    AllowAll, CombatantHooks, DiscardResults, NoHooks, ResultSink, SummonPolicy,
};
use super::result::{BattleResult, EndReason};
use super::scoring::{score, winner_by_score};
use super::summon::{check_summon, summon_cost, SummonContext, SummonRejection};
use super::types::{
    Combatant, CombatantId, PendingSummon, Phase, PlayerSide, PlayerState, Position, Rank,
    SummonTicket,
};
use crate::core::config::{BattleConfig, ConfigError};
use crate::core::constants::ENERGY_CAP;
use tracing::{debug, info, warn};
use uuid::Uuid;

fn system_clock() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Energy ceiling in effect, never above `ENERGY_CAP` even for an
/// unvalidated config.
fn energy_cap(config: &BattleConfig) -> u32 {
    config.energy_cap.min(ENERGY_CAP)
}

fn fresh_players(config: &BattleConfig) -> [PlayerState; 2] {
    let energy = config.starting_energy.min(energy_cap(config));
    [PlayerState::new(energy), PlayerState::new(energy)]
}

/// Authority for a single two-player match.
pub struct BattleEngine {
    config: BattleConfig,
    /// Correlates log lines for one match; regenerated on reset
    battle_id: Uuid,
    phase: Phase,
    current_turn: u32,
    active_player: PlayerSide,
    turn_time_remaining: f64,
    players: [PlayerState; 2],
    pending: Vec<PendingSummon>,
    next_ticket: u32,
    next_combatant_id: u32,
    result: Option<BattleResult>,
    end_reason: Option<EndReason>,
    events: Vec<BattleEvent>,
    policy: Box<dyn SummonPolicy>,
    hooks: Box<dyn CombatantHooks>,
    sink: Box<dyn ResultSink>,
    clock: fn() -> i64,
}

impl BattleEngine {
    /// Create an idle engine. The config is used as given; see
    /// [`BattleEngine::try_new`] for a validating constructor.
    pub fn new(config: BattleConfig) -> Self {
        Self {
            players: fresh_players(&config),
            turn_time_remaining: config.turn_duration_secs,
            config,
            battle_id: Uuid::new_v4(),
            phase: Phase::Idle,
            current_turn: 1,
            active_player: PlayerSide::Player1,
            pending: Vec::new(),
            next_ticket: 1,
            next_combatant_id: 1,
            result: None,
            end_reason: None,
            events: Vec::new(),
            policy: Box::new(AllowAll),
            hooks: Box::new(NoHooks),
            sink: Box::new(DiscardResults),
            clock: system_clock,
        }
    }

    /// Create an idle engine after validating the config.
    pub fn try_new(config: BattleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Set the summon eligibility authority.
    pub fn with_policy(mut self, policy: impl SummonPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Set the receiver of per-combatant turn callbacks.
    pub fn with_hooks(mut self, hooks: impl CombatantHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Set where the final result is handed off.
    pub fn with_result_sink(mut self, sink: impl ResultSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Override the timestamp source used for results.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn battle_id(&self) -> Uuid {
        self.battle_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn active_player(&self) -> PlayerSide {
        self.active_player
    }

    /// Seconds left in the active turn.
    pub fn turn_time_remaining(&self) -> f64 {
        self.turn_time_remaining
    }

    pub fn player(&self, side: PlayerSide) -> &PlayerState {
        &self.players[side.index()]
    }

    pub fn energy(&self, side: PlayerSide) -> u32 {
        self.player(side).energy
    }

    pub fn roster(&self, side: PlayerSide) -> &[Combatant] {
        &self.player(side).roster
    }

    /// Current score of a side (health plus rank weight of its roster).
    pub fn score(&self, side: PlayerSide) -> u32 {
        score(self.player(side))
    }

    /// The final result, once the battle has ended.
    pub fn result(&self) -> Option<&BattleResult> {
        self.result.as_ref()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Drain all events produced since the last call.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Start the match. Only valid from `Idle`; returns false otherwise.
    pub fn start_battle(&mut self) -> bool {
        if self.phase != Phase::Idle {
            debug!(battle = %self.battle_id, phase = ?self.phase, "start_battle ignored");
            return false;
        }

        self.players = fresh_players(&self.config);
        self.pending.clear();
        self.current_turn = 1;
        self.active_player = PlayerSide::Player1;
        self.phase = Phase::InProgress;

        info!(
            battle = %self.battle_id,
            max_turns = self.config.max_turns,
            turn_duration = self.config.turn_duration_secs,
            "Battle started"
        );
        self.events.push(BattleEvent::BattleStarted);
        self.begin_turn();
        true
    }

    /// Return to `Idle` from any phase, discarding all match state.
    /// Collaborators and config are kept.
    pub fn reset(&mut self) {
        self.battle_id = Uuid::new_v4();
        self.phase = Phase::Idle;
        self.current_turn = 1;
        self.active_player = PlayerSide::Player1;
        self.turn_time_remaining = self.config.turn_duration_secs;
        self.players = fresh_players(&self.config);
        self.pending.clear();
        self.next_ticket = 1;
        self.next_combatant_id = 1;
        self.result = None;
        self.end_reason = None;
        self.events.clear();
    }

    /// Advance the active turn's timer. When it reaches zero the turn ends.
    ///
    /// Ignored unless the battle is in progress, and for NaN or non-positive
    /// deltas. An infinite delta times the turn out. One call ends at most
    /// one turn.
    pub fn tick(&mut self, delta_seconds: f64) {
        if self.phase != Phase::InProgress {
            return;
        }
        if delta_seconds.is_nan() || delta_seconds <= 0.0 {
            return;
        }

        self.turn_time_remaining = (self.turn_time_remaining - delta_seconds).max(0.0);
        if self.turn_time_remaining <= 0.0 {
            self.end_turn();
        }
    }

    /// Concede. The opponent wins immediately; no scores are computed.
    pub fn forfeit(&mut self, player: PlayerSide) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        info!(battle = %self.battle_id, %player, "Player forfeited");
        self.finish(EndReason::Forfeit { loser: player });
        true
    }

    // ── Summoning ───────────────────────────────────────────────

    /// Full validation with the reason for a rejection.
    pub fn check_summon(&self, player: PlayerSide, rank: Rank) -> Result<(), SummonRejection> {
        let ctx = SummonContext {
            phase: self.phase,
            active_player: self.active_player,
            max_roster_size: self.config.max_roster_size,
            policy: self.policy.as_ref(),
        };
        check_summon(&ctx, player, self.player(player), rank)
    }

    /// Whether `player` may summon a unit of `rank` right now.
    pub fn can_summon(&self, player: PlayerSide, rank: Rank) -> bool {
        self.check_summon(player, rank).is_ok()
    }

    /// Validate and pay for a summon, then hand it to the execution layer via
    /// `BattleEvent::SummonApproved`.
    ///
    /// The unit joins the roster only when `on_summon_completed` is called
    /// with the returned ticket. Until then it holds a roster slot. On
    /// rejection nothing changes and nothing is emitted.
    pub fn try_request_summon(
        &mut self,
        player: PlayerSide,
        rank: Rank,
        position: Position,
    ) -> Result<SummonTicket, SummonRejection> {
        self.check_summon(player, rank)?;

        let cost = summon_cost(rank);
        let state = &mut self.players[player.index()];
        if !state.spend(cost) {
            // check_summon already verified the balance
            return Err(SummonRejection::NotEnoughEnergy {
                have: state.energy,
                need: cost,
            });
        }
        state.pending_summons += 1;
        let energy = state.energy;

        let ticket = SummonTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push(PendingSummon {
            ticket,
            owner: player,
            rank,
        });

        debug!(
            battle = %self.battle_id,
            %player,
            %rank,
            cost,
            energy,
            ticket = ticket.0,
            "Summon approved"
        );
        self.events.push(BattleEvent::EnergyChanged { player, energy });
        self.events.push(BattleEvent::SummonApproved {
            ticket,
            player,
            rank,
            position,
        });
        Ok(ticket)
    }

    /// Boolean form of [`BattleEngine::try_request_summon`].
    pub fn request_summon(&mut self, player: PlayerSide, rank: Rank, position: Position) -> bool {
        self.try_request_summon(player, rank, position).is_ok()
    }

    /// The execution layer finished placing the unit for `ticket`.
    ///
    /// Ownership comes from the original request. Ignored after the battle
    /// ended and for unknown or already-completed tickets.
    pub fn on_summon_completed(
        &mut self,
        ticket: SummonTicket,
        health: u32,
    ) -> Option<CombatantId> {
        if self.phase != Phase::InProgress {
            debug!(battle = %self.battle_id, ticket = ticket.0, "Late summon completion ignored");
            return None;
        }
        let index = self.pending.iter().position(|p| p.ticket == ticket)?;
        let pending = self.pending.swap_remove(index);

        let id = CombatantId(self.next_combatant_id);
        self.next_combatant_id += 1;
        let combatant = Combatant {
            id,
            owner: pending.owner,
            rank: pending.rank,
            current_health: health,
        };

        let state = &mut self.players[pending.owner.index()];
        state.pending_summons = state.pending_summons.saturating_sub(1);
        state.roster.push(combatant.clone());

        debug!(
            battle = %self.battle_id,
            owner = %pending.owner,
            id = id.0,
            roster = state.roster.len(),
            "Combatant summoned"
        );
        self.events.push(BattleEvent::AnimalSummoned { combatant });
        Some(id)
    }

    // ── Combatant reports ───────────────────────────────────────

    /// Remove a dead combatant. If that empties its owner's roster, the
    /// other player wins immediately.
    pub fn report_death(&mut self, id: CombatantId) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        let Some(owner) = self.owner_of(id) else {
            return false;
        };
        let state = &mut self.players[owner.index()];
        let Some(combatant) = state.remove(id) else {
            return false;
        };
        let roster_empty = state.roster.is_empty();

        debug!(battle = %self.battle_id, %owner, id = id.0, "Combatant died");
        self.events.push(BattleEvent::AnimalDeath { combatant });

        if roster_empty {
            self.finish(EndReason::RosterWiped { loser: owner });
        }
        true
    }

    /// Update a live combatant's health, as reported by the combat layer.
    pub fn report_health(&mut self, id: CombatantId, health: u32) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        let found = self
            .players
            .iter_mut()
            .flat_map(|p| p.roster.iter_mut())
            .find(|c| c.id == id);
        match found {
            Some(combatant) => {
                combatant.current_health = health;
                true
            }
            None => false,
        }
    }

    fn owner_of(&self, id: CombatantId) -> Option<PlayerSide> {
        PlayerSide::ALL
            .into_iter()
            .find(|side| self.player(*side).find(id).is_some())
    }

    // ── Turn flow ───────────────────────────────────────────────

    fn begin_turn(&mut self) {
        let player = self.active_player;
        let turn = self.current_turn;
        self.turn_time_remaining = self.config.turn_duration_secs;

        let state = &mut self.players[player.index()];
        state.regenerate(self.config.energy_regen, energy_cap(&self.config));
        let energy = state.energy;
        self.events.push(BattleEvent::EnergyChanged { player, energy });

        for combatant in &self.players[player.index()].roster {
            self.hooks.turn_started(combatant, turn);
        }

        debug!(battle = %self.battle_id, turn, %player, energy, "Turn started");
        self.events.push(BattleEvent::TurnStarted { turn, player });
    }

    fn end_turn(&mut self) {
        let player = self.active_player;
        let turn = self.current_turn;

        for combatant in &self.players[player.index()].roster {
            self.hooks.turn_ended(combatant, turn);
        }
        debug!(battle = %self.battle_id, turn, %player, "Turn ended");
        self.events.push(BattleEvent::TurnEnded { turn, player });

        self.active_player = player.opponent();
        if self.active_player == PlayerSide::Player1 {
            self.current_turn += 1;
        }

        if self.current_turn > self.config.max_turns {
            self.finish(EndReason::TurnLimit);
        } else {
            self.begin_turn();
        }
    }

    /// Shared terminal transition. Runs at most once per match.
    fn finish(&mut self, reason: EndReason) {
        if self.phase == Phase::Ended {
            return;
        }

        let (winner, player1_score, player2_score) = match reason {
            EndReason::TurnLimit => {
                let p1 = self.score(PlayerSide::Player1);
                let p2 = self.score(PlayerSide::Player2);
                (winner_by_score(p1, p2), p1, p2)
            }
            EndReason::RosterWiped { loser } | EndReason::Forfeit { loser } => {
                (loser.opponent().id(), 0, 0)
            }
        };

        let result = BattleResult {
            winner,
            turns_played: self.current_turn.min(self.config.max_turns),
            player1_score,
            player2_score,
            timestamp: (self.clock)(),
        };

        self.phase = Phase::Ended;
        self.end_reason = Some(reason);
        self.result = Some(result);

        info!(
            battle = %self.battle_id,
            winner,
            turns = result.turns_played,
            player1_score,
            player2_score,
            reason = ?reason,
            "Battle ended"
        );
        self.events.push(BattleEvent::BattleEnded { result });

        if let Err(e) = self.sink.record(&result) {
            warn!(battle = %self.battle_id, error = %e, "Failed to record battle result");
        }
    }
}
