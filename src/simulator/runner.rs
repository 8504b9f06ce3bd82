//! Season runner. Drives the real command surface in [`GameState`] so
//! simulated numbers match actual gameplay.

use super::config::SimConfig;
use super::report::SimReport;
use crate::game_state::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Final statistics of one simulated season.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub final_points: u32,
    /// One-based position in the final standings.
    pub final_position: usize,
    pub final_money: u32,
    pub final_team_skill: u32,
    /// Signed drift of the roster average over the season.
    pub skill_delta: i32,
    pub trophies: u32,
    pub tournaments_entered: u32,
    pub transfers_logged: usize,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_season(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Pos {}, Pts {}, ${}, Skill {} ({:+}), Trophies {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_position,
                run_stats.final_points,
                run_stats.final_money,
                run_stats.final_team_skill,
                run_stats.skill_delta,
                run_stats.trophies,
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs)
}

/// Simulate one season: league cycles with periodic tournament entries.
fn simulate_single_season(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut state = GameState::new("Simulated", rng);
    let starting_skill = state.human.average_skill() as i32;
    let mut tournaments_entered = 0;

    for cycle in 1..=config.cycles_per_run {
        state.play_league_match(rng);

        if config.tournament_every > 0
            && cycle % config.tournament_every == 0
            && state.enter_tournament(rng).is_ok()
        {
            tournaments_entered += 1;
        }
    }

    let final_position = state
        .standings()
        .iter()
        .position(|team| team.name() == state.human.name())
        .map(|index| index + 1)
        .unwrap_or(0);

    RunStats {
        final_points: state.human.points(),
        final_position,
        final_money: state.human.money(),
        final_team_skill: state.human.average_skill(),
        skill_delta: state.human.average_skill() as i32 - starting_skill,
        trophies: state.human.trophy_wins(),
        tournaments_entered,
        transfers_logged: state.activity.len(),
    }
}
