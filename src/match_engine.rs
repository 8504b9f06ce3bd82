//! Match resolution: two teams in, an outcome out, player progression
//! applied to both rosters along the way.

use crate::constants::FORM_SWING;
use crate::team::Team;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// Resolves a match. Each side's effective strength is its roster average
/// plus an independent uniform swing in [-5, +5]; the higher strength wins
/// and equal strengths are a draw. Interpretation of a draw is the
/// caller's: the league keeps it, a tournament advances the first-listed
/// team.
///
/// Both rosters take their post-match progression regardless of outcome.
/// Team records are untouched; standings are the orchestrator's job.
pub fn play_match(home: &mut Team, away: &mut Team, rng: &mut impl Rng) -> MatchOutcome {
    let home_strength = home.average_skill() as i32 + rng.gen_range(-FORM_SWING..=FORM_SWING);
    let away_strength = away.average_skill() as i32 + rng.gen_range(-FORM_SWING..=FORM_SWING);

    apply_post_match_progression(home, rng);
    apply_post_match_progression(away, rng);

    if home_strength > away_strength {
        MatchOutcome::HomeWin
    } else if away_strength > home_strength {
        MatchOutcome::AwayWin
    } else {
        MatchOutcome::Draw
    }
}

/// Every player appears once: the games counter first, then the
/// improvement roll, then decay against the already-updated counter.
fn apply_post_match_progression(team: &mut Team, rng: &mut impl Rng) {
    for player in team.players_mut() {
        player.increment_games_played();
        player.improve_after_game(rng);
        player.decay(rng);
    }
}
