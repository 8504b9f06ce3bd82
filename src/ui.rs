//! Text rendering for the interactive menu. Every screen renders to a
//! `String` so the terminal loop stays a thin print-and-prompt shell.

use crate::league::LeagueEvent;
use crate::market::{TransferMarket, TransferRecord};
use crate::match_engine::MatchOutcome;
use crate::skills::SkillType;
use crate::team::Team;
use crate::tournament::TournamentReport;
use std::fmt::Write;

pub fn render_menu() -> String {
    let mut out = String::new();
    out.push_str("\n===== MANAGER MENU =====\n");
    out.push_str(" 1. View team\n");
    out.push_str(" 2. Send players to bootcamp\n");
    out.push_str(" 3. Play league match\n");
    out.push_str(" 4. Enter tournament\n");
    out.push_str(" 5. Transfer market\n");
    out.push_str(" 6. Finances\n");
    out.push_str(" 7. League standings\n");
    out.push_str(" 8. Recent transfer activity\n");
    out.push_str(" 9. Trophy ranking\n");
    out.push_str("10. Exit\n");
    out
}

/// Roster table: one row per player with all five skills, the average,
/// potential, and career appearances.
pub fn render_team(team: &Team) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== {} ===", team.name());
    let _ = writeln!(
        out,
        "{:<3} {:<12} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5}",
        "#", "Name", "AIM", "MOV", "STR", "TMW", "REF", "Avg", "Pot", "GP"
    );
    for (slot, player) in team.players().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<3} {:<12} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5}",
            slot + 1,
            player.name(),
            player.skill(SkillType::Aim),
            player.skill(SkillType::Movement),
            player.skill(SkillType::Strategy),
            player.skill(SkillType::Teamwork),
            player.skill(SkillType::Reflexes),
            player.avg_skill(),
            player.potential(),
            player.games_played(),
        );
    }
    let _ = writeln!(out, "Team average: {}", team.average_skill());
    out
}

pub fn render_finances(team: &Team) -> String {
    format!("\n{} balance: ${}\n", team.name(), team.money())
}

/// Points table, already ordered by the caller.
pub fn render_standings(table: &[&Team]) -> String {
    let mut out = String::new();
    out.push_str("\n=== LEAGUE STANDINGS ===\n");
    let _ = writeln!(
        out,
        "{:<4} {:<14} {:>3} {:>3} {:>3} {:>4}",
        "Pos", "Team", "W", "L", "D", "Pts"
    );
    for (position, team) in table.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<14} {:>3} {:>3} {:>3} {:>4}",
            position + 1,
            team.name(),
            team.wins(),
            team.losses(),
            team.draws(),
            team.points(),
        );
    }
    out
}

pub fn render_trophy_ranking(table: &[&Team]) -> String {
    let mut out = String::new();
    out.push_str("\n=== TROPHY RANKING ===\n");
    for (position, team) in table.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<14} {} trophies",
            position + 1,
            team.name(),
            team.trophy_wins(),
        );
    }
    out
}

/// Market listings plus the human roster with its sale values.
pub fn render_market(market: &TransferMarket, team: &Team) -> String {
    let mut out = String::new();
    out.push_str("\n=== TRANSFER MARKET ===\n");
    if market.is_empty() {
        out.push_str("No players listed.\n");
    } else {
        for (index, player) in market.players().iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>2}. {:<12} avg {:>3}  pot {:>3}  ${}",
                index + 1,
                player.name(),
                player.avg_skill(),
                player.potential(),
                player.market_value(),
            );
        }
    }
    out.push_str("\nYour roster (sale values):\n");
    for (slot, player) in team.players().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<12} avg {:>3}  ${}",
            slot + 1,
            player.name(),
            player.avg_skill(),
            player.market_value(),
        );
    }
    out
}

pub fn render_activity(records: &[TransferRecord]) -> String {
    let mut out = String::new();
    out.push_str("\n=== RECENT TRANSFER ACTIVITY ===\n");
    if records.is_empty() {
        out.push_str("No transfers yet.\n");
        return out;
    }
    for record in records {
        let _ = writeln!(
            out,
            "{} {} {} (pot {}) for ${}",
            record.team, record.action, record.player, record.potential, record.amount,
        );
    }
    out
}

/// Narrates a league cycle from the human team's point of view.
pub fn render_league_events(team_name: &str, events: &[LeagueEvent]) -> String {
    let mut out = String::new();
    for event in events {
        match event {
            LeagueEvent::HumanMatch { opponent, outcome } => {
                let verdict = match outcome {
                    MatchOutcome::HomeWin => "Victory!",
                    MatchOutcome::AwayWin => "Defeat!",
                    MatchOutcome::Draw => "Draw!",
                };
                let _ = writeln!(out, "{verdict} {team_name} vs {opponent}");
            }
            LeagueEvent::AiMatch {
                home,
                away,
                outcome,
            } => {
                let line = match outcome {
                    MatchOutcome::HomeWin => format!("{home} beats {away}"),
                    MatchOutcome::AwayWin => format!("{away} beats {home}"),
                    MatchOutcome::Draw => format!("{home} draws {away}"),
                };
                let _ = writeln!(out, "{line}");
            }
            LeagueEvent::Transfer(record) => {
                let _ = writeln!(
                    out,
                    "Transfer: {} {} {} for ${}",
                    record.team, record.action, record.player, record.amount,
                );
            }
        }
    }
    out
}

pub fn render_tournament(report: &TournamentReport) -> String {
    let mut out = String::new();
    out.push_str("\n=== TOURNAMENT ===\n");
    for (index, game) in report.matches.iter().enumerate() {
        let stage = if index < 2 { "Semifinal" } else { "Final" };
        let _ = writeln!(
            out,
            "{stage}: {} vs {} -> {}",
            game.home, game.away, game.winner
        );
    }
    let _ = writeln!(out, "Champion: {}", report.champion);
    if report.human_champion {
        let _ = writeln!(out, "You take the trophy and ${}!", report.prize_awarded);
    }
    out
}
