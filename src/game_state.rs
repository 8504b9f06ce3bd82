//! Session state and the command surface the menus drive.
//!
//! All shared mutable state — teams, market, ledger — is owned here and
//! passed down by reference; nothing lives in process-wide globals.

use crate::constants::*;
use crate::errors::CommandError;
use crate::league::{run_league_cycle, LeagueEvent};
use crate::market::{ActivityLog, TransferMarket, TransferRecord};
use crate::player::Player;
use crate::team::Team;
use crate::tournament::{run_tournament, TournamentReport};
use rand::Rng;

/// The AI clubs every session starts with.
pub const AI_TEAM_NAMES: [&str; 5] = [
    "ThunderHub",
    "BlazeSquad",
    "IceWolves",
    "ShadowPeak",
    "SteelVipers",
];

#[derive(Debug, Clone)]
pub struct GameState {
    pub human: Team,
    pub ai_teams: Vec<Team>,
    pub market: TransferMarket,
    pub activity: ActivityLog,
}

impl GameState {
    /// Starts a session: the human club with its starting budget, the five
    /// AI clubs with randomized budgets, and a stocked market.
    pub fn new(team_name: impl Into<String>, rng: &mut impl Rng) -> Self {
        let human = Team::new(team_name, STARTING_MONEY, rng);
        let ai_teams = AI_TEAM_NAMES
            .iter()
            .map(|name| {
                let money = AI_STARTING_MONEY_BASE + rng.gen_range(0..AI_STARTING_MONEY_SPREAD);
                Team::new(*name, money, rng)
            })
            .collect();
        let market = TransferMarket::stocked(INITIAL_MARKET_STOCK, rng);
        Self {
            human,
            ai_teams,
            market,
            activity: ActivityLog::new(),
        }
    }

    /// Plays one league cycle (§ league module) and returns its events.
    pub fn play_league_match(&mut self, rng: &mut impl Rng) -> Vec<LeagueEvent> {
        run_league_cycle(
            &mut self.human,
            &mut self.ai_teams,
            &mut self.market,
            &mut self.activity,
            rng,
        )
    }

    /// Enters the human team into a tournament.
    pub fn enter_tournament(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<TournamentReport, CommandError> {
        run_tournament(&mut self.human, &mut self.ai_teams, rng)
    }

    /// Sends the selected roster slots to bootcamp at a fixed per-player
    /// fee. Rejects out-of-range slots, empty selections, and unaffordable
    /// bills before touching anything; on success returns the cost paid.
    pub fn send_to_bootcamp(
        &mut self,
        selection: &[usize],
        rng: &mut impl Rng,
    ) -> Result<u32, CommandError> {
        if selection.is_empty() {
            return Err(CommandError::EmptySelection);
        }
        if let Some(&slot) = selection.iter().find(|&&slot| slot >= ROSTER_SIZE) {
            return Err(CommandError::InvalidRosterSlot(slot));
        }
        let cost = BOOTCAMP_COST_PER_PLAYER * selection.len() as u32;
        if !self.human.try_debit(cost) {
            return Err(CommandError::InsufficientFunds {
                needed: cost,
                available: self.human.money(),
            });
        }
        for &slot in selection {
            self.human.players_mut()[slot].bootcamp(rng);
        }
        Ok(cost)
    }

    /// Buys a market listing into a roster slot. The displaced player
    /// retires. Returns the signing's name and the price paid.
    pub fn market_buy(
        &mut self,
        market_index: usize,
        roster_slot: usize,
    ) -> Result<(String, u32), CommandError> {
        let Some(listing) = self.market.get(market_index) else {
            return Err(CommandError::InvalidMarketIndex(market_index));
        };
        if roster_slot >= ROSTER_SIZE {
            return Err(CommandError::InvalidRosterSlot(roster_slot));
        }
        let price = listing.market_value();
        if !self.human.try_debit(price) {
            return Err(CommandError::InsufficientFunds {
                needed: price,
                available: self.human.money(),
            });
        }
        let incoming = self.market.remove(market_index);
        let name = incoming.name().to_string();
        let _retired = self.human.replace_slot(roster_slot, incoming);
        Ok((name, price))
    }

    /// Sells a roster slot into the market at its market value and refills
    /// the slot with a fresh signing. Returns the name and the proceeds.
    pub fn market_sell(
        &mut self,
        roster_slot: usize,
        rng: &mut impl Rng,
    ) -> Result<(String, u32), CommandError> {
        if roster_slot >= ROSTER_SIZE {
            return Err(CommandError::InvalidRosterSlot(roster_slot));
        }
        let proceeds = self.human.players()[roster_slot].market_value();
        self.human.credit(proceeds);
        let outgoing = self.human.replace_slot(roster_slot, Player::generate(rng));
        let name = outgoing.name().to_string();
        self.market.add(outgoing);
        Ok((name, proceeds))
    }

    /// All teams ordered by points, descending. The sort is stable, so
    /// tied teams keep their session order.
    pub fn standings(&self) -> Vec<&Team> {
        let mut table: Vec<&Team> = std::iter::once(&self.human)
            .chain(self.ai_teams.iter())
            .collect();
        table.sort_by(|left, right| right.points().cmp(&left.points()));
        table
    }

    /// All teams ordered by tournament titles, descending; stable on ties.
    pub fn trophy_ranking(&self) -> Vec<&Team> {
        let mut table: Vec<&Team> = std::iter::once(&self.human)
            .chain(self.ai_teams.iter())
            .collect();
        table.sort_by(|left, right| right.trophy_wins().cmp(&left.trophy_wins()));
        table
    }

    /// The most recent `count` ledger entries, oldest first.
    pub fn recent_activity(&self, count: usize) -> &[TransferRecord] {
        self.activity.recent(count)
    }
}
