//! Simulation report generation.

use super::stats::{RejectionCounts, RunStats};
use crate::battle::result::EndReason;
use serde::Serialize;

/// Aggregated results from multiple simulated matches.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,

    // Outcomes
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub draws: u32,

    // How matches ended
    pub ended_by_turn_limit: u32,
    pub ended_by_roster_wipe: u32,
    pub ended_by_forfeit: u32,

    // Averages
    pub avg_turns_played: f64,
    pub avg_ticks: f64,
    pub avg_summons: f64,
    pub avg_deaths: f64,
    pub avg_player1_score: f64,
    pub avg_player2_score: f64,

    pub rejections: RejectionCounts,

    /// Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn count(runs: &[RunStats], pred: impl Fn(&RunStats) -> bool) -> u32 {
    runs.iter().filter(|r| pred(r)).count() as u32
}

fn average(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_ticks: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_timed_out = count(&runs, |r| r.timed_out() && r.total_ticks >= max_ticks);
        let player1_wins = count(&runs, |r| r.winner == Some(1));
        let player2_wins = count(&runs, |r| r.winner == Some(2));
        let draws = count(&runs, |r| r.winner == Some(0));
        let ended_by_turn_limit = count(&runs, |r| r.end_reason == Some(EndReason::TurnLimit));
        let ended_by_roster_wipe =
            count(&runs, |r| matches!(r.end_reason, Some(EndReason::RosterWiped { .. })));
        let ended_by_forfeit =
            count(&runs, |r| matches!(r.end_reason, Some(EndReason::Forfeit { .. })));

        // Scores only mean something for matches decided on points
        let scored: Vec<RunStats> = runs
            .iter()
            .filter(|r| r.end_reason == Some(EndReason::TurnLimit))
            .cloned()
            .collect();

        let mut rejections = RejectionCounts::default();
        for run in &runs {
            rejections.add(&run.rejections);
        }

        Self {
            num_runs,
            runs_timed_out,
            player1_wins,
            player2_wins,
            draws,
            ended_by_turn_limit,
            ended_by_roster_wipe,
            ended_by_forfeit,
            avg_turns_played: average(&runs, |r| f64::from(r.turns_played)),
            avg_ticks: average(&runs, |r| r.total_ticks as f64),
            avg_summons: average(&runs, |r| r.summons_completed as f64),
            avg_deaths: average(&runs, |r| r.deaths as f64),
            avg_player1_score: average(&scored, |r| f64::from(r.player1_score)),
            avg_player2_score: average(&scored, |r| f64::from(r.player2_score)),
            rejections,
            run_stats: runs,
        }
    }

    /// Share of matches won by `wins`, in percent.
    fn percent(&self, wins: u32) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        f64::from(wins) * 100.0 / f64::from(self.num_runs)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Matches: {} total, {} abandoned\n\n",
            self.num_runs, self.runs_timed_out
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Player 1 wins:       {} ({:.1}%)\n",
            self.player1_wins,
            self.percent(self.player1_wins)
        ));
        report.push_str(&format!(
            "  Player 2 wins:       {} ({:.1}%)\n",
            self.player2_wins,
            self.percent(self.player2_wins)
        ));
        report.push_str(&format!(
            "  Draws:               {} ({:.1}%)\n\n",
            self.draws,
            self.percent(self.draws)
        ));

        report.push_str("── ENDINGS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Turn limit:          {}\n", self.ended_by_turn_limit));
        report.push_str(&format!("  Roster wiped:        {}\n", self.ended_by_roster_wipe));
        report.push_str(&format!("  Forfeit:             {}\n\n", self.ended_by_forfeit));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Turns:           {:.1}\n", self.avg_turns_played));
        report.push_str(&format!("  Avg Ticks:           {:.0}\n", self.avg_ticks));
        report.push_str(&format!("  Avg Summons:         {:.1}\n", self.avg_summons));
        report.push_str(&format!("  Avg Deaths:          {:.1}\n", self.avg_deaths));
        report.push_str(&format!(
            "  Avg Score (points):  {:.0} vs {:.0}\n\n",
            self.avg_player1_score, self.avg_player2_score
        ));

        report.push_str("── SUMMON REJECTIONS ────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Not enough energy:   {}\n",
            self.rejections.not_enough_energy
        ));
        report.push_str(&format!("  Roster full:         {}\n", self.rejections.roster_full));
        report.push_str(&format!(
            "  Rank not allowed:    {}\n",
            self.rejections.rank_not_allowed
        ));
        report.push_str(&format!("  Total:               {}\n", self.rejections.total()));

        report
    }

    /// Generate JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
