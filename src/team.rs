//! Team roster, finances, and league record.

use crate::constants::{POINTS_PER_DRAW, POINTS_PER_WIN, ROSTER_SIZE};
use crate::player::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A club with a fixed five-slot roster. Slot positions are meaningful:
/// transfers overwrite a slot, they never reorder or resize the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    name: String,
    players: [Player; ROSTER_SIZE],
    money: u32,
    wins: u32,
    losses: u32,
    draws: u32,
    points: u32,
    trophy_wins: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, money: u32, rng: &mut impl Rng) -> Self {
        Self::with_roster(name, std::array::from_fn(|_| Player::generate(rng)), money)
    }

    /// Builds a team around a known roster. Used by fixtures and tests.
    pub fn with_roster(name: impl Into<String>, players: [Player; ROSTER_SIZE], money: u32) -> Self {
        Self {
            name: name.into(),
            players,
            money,
            wins: 0,
            losses: 0,
            draws: 0,
            points: 0,
            trophy_wins: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player(&self, slot: usize) -> Option<&Player> {
        self.players.get(slot)
    }

    /// Truncated mean of the roster's average skills. Computed on demand.
    pub fn average_skill(&self) -> u32 {
        self.players.iter().map(Player::avg_skill).sum::<u32>() / ROSTER_SIZE as u32
    }

    /// Overwrites a roster slot and returns the outgoing player.
    /// `slot` must be below [`ROSTER_SIZE`]; command paths validate first.
    pub fn replace_slot(&mut self, slot: usize, incoming: Player) -> Player {
        std::mem::replace(&mut self.players[slot], incoming)
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn credit(&mut self, amount: u32) {
        self.money += amount;
    }

    /// Deducts `amount` if the balance covers it. Returns false and leaves
    /// the balance untouched otherwise; the balance can never go negative.
    #[must_use]
    pub fn try_debit(&mut self, amount: u32) -> bool {
        if self.money < amount {
            return false;
        }
        self.money -= amount;
        true
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn trophy_wins(&self) -> u32 {
        self.trophy_wins
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
        self.points += POINTS_PER_WIN;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
        self.points += POINTS_PER_DRAW;
    }

    pub fn award_trophy(&mut self) {
        self.trophy_wins += 1;
    }
}

/// Mutable access to two distinct teams in the same slice.
pub(crate) fn two_mut(teams: &mut [Team], first: usize, second: usize) -> (&mut Team, &mut Team) {
    debug_assert_ne!(first, second);
    if first < second {
        let (left, right) = teams.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = teams.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}
