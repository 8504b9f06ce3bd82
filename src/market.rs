//! The shared transfer market and the activity ledger.

use crate::player::Player;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferAction {
    Bought,
    Sold,
}

impl fmt::Display for TransferAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferAction::Bought => write!(f, "bought"),
            TransferAction::Sold => write!(f, "sold"),
        }
    }
}

/// One completed transaction in the activity ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRecord {
    pub team: String,
    pub action: TransferAction,
    pub player: String,
    pub potential: u32,
    pub amount: u32,
    pub recorded_at: DateTime<Utc>,
}

impl TransferRecord {
    pub fn new(team: impl Into<String>, action: TransferAction, player: &Player, amount: u32) -> Self {
        Self {
            team: team.into(),
            action,
            player: player.name().to_string(),
            potential: player.potential(),
            amount,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered pool of unowned players, purchasable at their market value.
/// Grows as teams sell; the session loop trims it to a recent window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferMarket {
    players: Vec<Player>,
}

impl TransferMarket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stocked(count: usize, rng: &mut impl Rng) -> Self {
        let mut market = Self::new();
        market.stock(count, rng);
        market
    }

    /// Appends `count` freshly generated players.
    pub fn stock(&mut self, count: usize, rng: &mut impl Rng) {
        for _ in 0..count {
            self.players.push(Player::generate(rng));
        }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Removes and returns the listing at `index`.
    /// `index` must be in range; command paths validate first.
    pub fn remove(&mut self, index: usize) -> Player {
        self.players.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Evicts the oldest listings until at most `cap` remain. The cap is a
    /// deliberate discard-oldest policy, not incidental slicing.
    pub fn trim_to_recent(&mut self, cap: usize) {
        if self.players.len() > cap {
            let excess = self.players.len() - cap;
            self.players.drain(..excess);
        }
    }
}

/// Append-only transaction history of AI market activity. Unbounded;
/// consumers look at the most recent window only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<TransferRecord>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: TransferRecord) {
        self.entries.push(record);
    }

    /// The most recent `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> &[TransferRecord] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[TransferRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
