//! Autonomous transfer decisions for AI-controlled teams.
//!
//! Each AI team evaluates the market once per league cycle with simple
//! greedy heuristics: a team short on cash liquidates its best asset, a
//! flush team shops for an upgrade over its weakest slot. An agent sells
//! or buys, never both in the same cycle.

use crate::constants::{AI_ACT_CHANCE_IN_TEN, BUY_ABOVE_BALANCE, SELL_BELOW_BALANCE};
use crate::market::{ActivityLog, TransferAction, TransferMarket, TransferRecord};
use crate::player::Player;
use crate::team::Team;
use rand::Rng;

/// One market evaluation. Acts with a fixed 70% chance per cycle; the
/// completed transaction, if any, is appended to the ledger and returned.
pub fn ai_transfer_decision(
    team: &mut Team,
    market: &mut TransferMarket,
    log: &mut ActivityLog,
    rng: &mut impl Rng,
) -> Option<TransferRecord> {
    if rng.gen_range(0..10) >= AI_ACT_CHANCE_IN_TEN {
        return None;
    }

    if team.money() < SELL_BELOW_BALANCE {
        sell_best_player(team, market, log, rng)
    } else if team.money() > BUY_ABOVE_BALANCE && !market.is_empty() {
        buy_upgrade(team, market, log)
    } else {
        None
    }
}

/// Liquidates the highest-average player for cash and refills the slot
/// with a fresh signing.
fn sell_best_player(
    team: &mut Team,
    market: &mut TransferMarket,
    log: &mut ActivityLog,
    rng: &mut impl Rng,
) -> Option<TransferRecord> {
    let slot = best_slot(team);
    let price = team.players()[slot].market_value();
    team.credit(price);

    let outgoing = team.replace_slot(slot, Player::generate(rng));
    let record = TransferRecord::new(team.name(), TransferAction::Sold, &outgoing, price);
    market.add(outgoing);
    log.record(record.clone());
    Some(record)
}

/// Scans the market in listing order and buys the first player who both
/// beats the team's weakest average and fits the budget. The displaced
/// player retires.
fn buy_upgrade(
    team: &mut Team,
    market: &mut TransferMarket,
    log: &mut ActivityLog,
) -> Option<TransferRecord> {
    let slot = worst_slot(team);
    let floor = team.players()[slot].avg_skill();

    for index in 0..market.len() {
        let candidate = &market.players()[index];
        let price = candidate.market_value();
        if candidate.avg_skill() > floor && team.try_debit(price) {
            let incoming = market.remove(index);
            let record =
                TransferRecord::new(team.name(), TransferAction::Bought, &incoming, price);
            let _retired = team.replace_slot(slot, incoming);
            log.record(record.clone());
            return Some(record);
        }
    }
    None
}

/// Slot of the highest-average player; the first slot wins ties.
fn best_slot(team: &Team) -> usize {
    let mut best = 0;
    for (slot, player) in team.players().iter().enumerate() {
        if player.avg_skill() > team.players()[best].avg_skill() {
            best = slot;
        }
    }
    best
}

/// Slot of the lowest-average player; the first slot wins ties.
fn worst_slot(team: &Team) -> usize {
    let mut worst = 0;
    for (slot, player) in team.players().iter().enumerate() {
        if player.avg_skill() < team.players()[worst].avg_skill() {
            worst = slot;
        }
    }
    worst
}
