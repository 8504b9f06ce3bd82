//! Simulation report generation.

use super::runner::RunStats;
use serde::Serialize;

/// Aggregated results from multiple simulated seasons.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,

    // Aggregated stats
    pub avg_final_points: f64,
    pub avg_final_position: f64,
    pub avg_final_money: f64,
    pub avg_final_team_skill: f64,
    pub avg_skill_delta: f64,
    pub avg_transfers_logged: f64,

    // Tournament outcomes
    pub total_tournaments_entered: u32,
    pub total_trophies: u32,
    pub trophy_rate: f64,

    /// Season count per final position; index 0 is first place.
    pub position_distribution: Vec<u32>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;

        let avg_final_points = runs.iter().map(|r| r.final_points as f64).sum::<f64>() / denom;
        let avg_final_position =
            runs.iter().map(|r| r.final_position as f64).sum::<f64>() / denom;
        let avg_final_money = runs.iter().map(|r| r.final_money as f64).sum::<f64>() / denom;
        let avg_final_team_skill =
            runs.iter().map(|r| r.final_team_skill as f64).sum::<f64>() / denom;
        let avg_skill_delta = runs.iter().map(|r| r.skill_delta as f64).sum::<f64>() / denom;
        let avg_transfers_logged =
            runs.iter().map(|r| r.transfers_logged as f64).sum::<f64>() / denom;

        let total_tournaments_entered = runs.iter().map(|r| r.tournaments_entered).sum();
        let total_trophies = runs.iter().map(|r| r.trophies).sum::<u32>();
        let trophy_rate = if total_tournaments_entered > 0 {
            total_trophies as f64 / total_tournaments_entered as f64
        } else {
            0.0
        };

        let max_position = runs.iter().map(|r| r.final_position).max().unwrap_or(0);
        let mut position_distribution = vec![0u32; max_position];
        for run in &runs {
            if run.final_position >= 1 {
                position_distribution[run.final_position - 1] += 1;
            }
        }

        Self {
            num_runs,
            avg_final_points,
            avg_final_position,
            avg_final_money,
            avg_final_team_skill,
            avg_skill_delta,
            avg_transfers_logged,
            total_tournaments_entered,
            total_trophies,
            trophy_rate,
            position_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Seasons: {}\n\n", self.num_runs));

        report.push_str("── SEASON OUTCOMES ─────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Points:    {:.1}\n",
            self.avg_final_points
        ));
        report.push_str(&format!(
            "  Avg Final Position:  {:.2}\n",
            self.avg_final_position
        ));
        report.push_str(&format!(
            "  Avg Final Money:     ${:.0}\n",
            self.avg_final_money
        ));
        report.push_str(&format!(
            "  Avg Team Skill:      {:.1} ({:+.1} over the season)\n",
            self.avg_final_team_skill, self.avg_skill_delta
        ));
        report.push_str(&format!(
            "  Avg AI Transfers:    {:.1}\n\n",
            self.avg_transfers_logged
        ));

        report.push_str("── TOURNAMENTS ─────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Entered: {}   Won: {}   Win Rate: {:.1}%\n\n",
            self.total_tournaments_entered,
            self.total_trophies,
            self.trophy_rate * 100.0
        ));

        report.push_str("── FINAL POSITION DISTRIBUTION ─────────────────────────────────\n");
        for (index, count) in self.position_distribution.iter().enumerate() {
            let share = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            report.push_str(&format!(
                "  Pos {:>2}: {:>5} ({:>5.1}%)\n",
                index + 1,
                count,
                share
            ));
        }

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"))
    }
}
