//! Single-elimination tournament: a four-team bracket gated by an entry
//! fee, resolved synchronously in one call.

use crate::constants::{TOURNAMENT_BRACKET_SIZE, TOURNAMENT_ENTRY_FEE, TOURNAMENT_PRIZE};
use crate::errors::CommandError;
use crate::match_engine::{play_match, MatchOutcome};
use crate::team::{two_mut, Team};
use rand::Rng;

/// A bracket slot. The human team always enters at slot 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entrant {
    Human,
    Ai(usize),
}

#[derive(Debug, Clone)]
pub struct TournamentMatch {
    pub home: String,
    pub away: String,
    pub winner: String,
}

#[derive(Debug, Clone)]
pub struct TournamentReport {
    /// Both semifinals, then the final.
    pub matches: Vec<TournamentMatch>,
    pub champion: String,
    pub prize_awarded: u32,
    pub human_champion: bool,
}

/// Runs a tournament entered by the human team. The entry fee is checked
/// up front: an unaffordable entry is rejected with no state change at
/// all. Needs at least three AI teams to fill the bracket.
///
/// Bracket matches share the league's resolution but not its draws: on
/// equal strength the first-listed team advances. This asymmetric
/// tie-break favors the earlier slot and is kept deliberately; changing
/// it to a coin flip would shift game balance.
pub fn run_tournament(
    human: &mut Team,
    ai_teams: &mut [Team],
    rng: &mut impl Rng,
) -> Result<TournamentReport, CommandError> {
    debug_assert!(ai_teams.len() >= TOURNAMENT_BRACKET_SIZE - 1);
    if !human.try_debit(TOURNAMENT_ENTRY_FEE) {
        return Err(CommandError::InsufficientFunds {
            needed: TOURNAMENT_ENTRY_FEE,
            available: human.money(),
        });
    }

    let bracket = draw_bracket(ai_teams.len(), rng);
    let mut matches = Vec::with_capacity(3);

    let first_finalist = play_round(bracket[0], bracket[1], human, ai_teams, rng, &mut matches);
    let second_finalist = play_round(bracket[2], bracket[3], human, ai_teams, rng, &mut matches);
    let champion = play_round(
        first_finalist,
        second_finalist,
        human,
        ai_teams,
        rng,
        &mut matches,
    );

    let human_champion = champion == Entrant::Human;
    team_mut(champion, human, ai_teams).award_trophy();
    let prize_awarded = if human_champion {
        human.credit(TOURNAMENT_PRIZE);
        TOURNAMENT_PRIZE
    } else {
        0
    };

    Ok(TournamentReport {
        champion: team_mut(champion, human, ai_teams).name().to_string(),
        matches,
        prize_awarded,
        human_champion,
    })
}

/// Fills the bracket: the entering team plus three distinct AI opponents,
/// sampled uniformly with duplicate rejection.
fn draw_bracket(ai_count: usize, rng: &mut impl Rng) -> [Entrant; TOURNAMENT_BRACKET_SIZE] {
    let mut picked: Vec<usize> = Vec::with_capacity(TOURNAMENT_BRACKET_SIZE - 1);
    while picked.len() < TOURNAMENT_BRACKET_SIZE - 1 {
        let candidate = rng.gen_range(0..ai_count);
        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }
    [
        Entrant::Human,
        Entrant::Ai(picked[0]),
        Entrant::Ai(picked[1]),
        Entrant::Ai(picked[2]),
    ]
}

/// Resolves one bracket match and records it. On equal strength the
/// first-listed side advances.
fn play_round(
    home: Entrant,
    away: Entrant,
    human: &mut Team,
    ai_teams: &mut [Team],
    rng: &mut impl Rng,
    matches: &mut Vec<TournamentMatch>,
) -> Entrant {
    let outcome = match (home, away) {
        (Entrant::Human, Entrant::Ai(away_index)) => {
            play_match(human, &mut ai_teams[away_index], rng)
        }
        (Entrant::Ai(home_index), Entrant::Human) => {
            play_match(&mut ai_teams[home_index], human, rng)
        }
        (Entrant::Ai(home_index), Entrant::Ai(away_index)) => {
            let (home_team, away_team) = two_mut(ai_teams, home_index, away_index);
            play_match(home_team, away_team, rng)
        }
        // The bracket never pairs the human team with itself.
        (Entrant::Human, Entrant::Human) => MatchOutcome::Draw,
    };

    let winner = match outcome {
        MatchOutcome::AwayWin => away,
        MatchOutcome::HomeWin | MatchOutcome::Draw => home,
    };
    matches.push(TournamentMatch {
        home: team_mut(home, human, ai_teams).name().to_string(),
        away: team_mut(away, human, ai_teams).name().to_string(),
        winner: team_mut(winner, human, ai_teams).name().to_string(),
    });
    winner
}

fn team_mut<'a>(entrant: Entrant, human: &'a mut Team, ai_teams: &'a mut [Team]) -> &'a mut Team {
    match entrant {
        Entrant::Human => human,
        Entrant::Ai(index) => &mut ai_teams[index],
    }
}
