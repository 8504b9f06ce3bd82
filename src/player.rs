//! Player generation and career progression.
//!
//! A player's five skills drift over a career: bootcamps and post-match
//! improvement pull them toward a fixed potential ceiling, and accumulated
//! games slowly erode them again.

use crate::constants::*;
use crate::skills::{SkillSet, SkillType};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// First-name pool for generated players. A random 0-99 suffix keeps
/// display names from colliding too often.
pub const PLAYER_NAMES: [&str; 10] = [
    "Jake", "Liam", "Noah", "Ethan", "Mason", "Logan", "Lucas", "Aiden", "Caleb", "Owen",
];

/// Skill decay tiers: (games played threshold, magnitude). Checked in
/// order, highest tier first.
const DECAY_TIERS: [(u32, u32); 3] = [(400, 8), (200, 4), (100, 1)];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    skills: SkillSet,
    avg_skill: u32,
    potential: u32,
    games_played: u32,
}

impl Player {
    /// Generates a fresh player: each skill uniform in [50, 70], potential
    /// uniform in [80, 98], no games played.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let name = format!(
            "{}{}",
            PLAYER_NAMES[rng.gen_range(0..PLAYER_NAMES.len())],
            rng.gen_range(0..100)
        );
        let skills = SkillSet::from_values(std::array::from_fn(|_| {
            rng.gen_range(SKILL_GEN_MIN..=SKILL_GEN_MAX)
        }));
        let potential = rng.gen_range(POTENTIAL_MIN..=POTENTIAL_MAX);
        let mut player = Self {
            name,
            skills,
            avg_skill: 0,
            potential,
            games_played: 0,
        };
        player.update_avg_skill();
        player
    }

    /// Builds a player with known skills and potential. Used by fixtures
    /// and scripted rosters; `avg_skill` is derived, never taken on trust.
    pub fn with_attributes(name: impl Into<String>, skills: SkillSet, potential: u32) -> Self {
        let mut player = Self {
            name: name.into(),
            skills,
            avg_skill: 0,
            potential,
            games_played: 0,
        };
        player.update_avg_skill();
        player
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill(&self, skill: SkillType) -> u32 {
        self.skills.get(skill)
    }

    pub fn avg_skill(&self) -> u32 {
        self.avg_skill
    }

    pub fn potential(&self) -> u32 {
        self.potential
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Asking price on the transfer market.
    pub fn market_value(&self) -> u32 {
        self.avg_skill * PRICE_PER_SKILL_POINT
    }

    fn update_avg_skill(&mut self) {
        self.avg_skill = self.skills.average();
    }

    /// Intensive training: every skill gains uniform [1, 5], clamped to
    /// potential. Costs and eligibility are the caller's concern.
    pub fn bootcamp(&mut self, rng: &mut impl Rng) {
        for skill in SkillType::all() {
            let gain = rng.gen_range(BOOTCAMP_GAIN_MIN..=BOOTCAMP_GAIN_MAX);
            let raised = (self.skills.get(skill) + gain).min(self.potential);
            self.skills.set(skill, raised);
        }
        self.update_avg_skill();
    }

    /// Post-match improvement roll. Each skill still below potential gains
    /// one point with probability `(potential - avg_skill) / 2` percent;
    /// the average is held fixed across the five checks, so a player far
    /// below potential improves often and a player at potential never does.
    pub fn improve_after_game(&mut self, rng: &mut impl Rng) {
        let chance = self.potential.saturating_sub(self.avg_skill) / 2;
        for skill in SkillType::all() {
            let value = self.skills.get(skill);
            if value < self.potential && rng.gen_range(0..100) < chance {
                self.skills.set(skill, value + 1);
            }
        }
        self.update_avg_skill();
    }

    /// Career wear. Long careers lose one randomly chosen skill point
    /// block per match: 1 point past 100 games, 4 past 200, 8 past 400.
    /// No effect below 100 games.
    pub fn decay(&mut self, rng: &mut impl Rng) {
        let Some(magnitude) = decay_magnitude(self.games_played) else {
            return;
        };
        let all = SkillType::all();
        let target = all[rng.gen_range(0..all.len())];
        self.skills
            .set(target, self.skills.get(target).saturating_sub(magnitude));
        self.update_avg_skill();
    }

    /// Counts one appearance. Monotonic; never reset.
    pub fn increment_games_played(&mut self) {
        self.games_played += 1;
    }
}

fn decay_magnitude(games_played: u32) -> Option<u32> {
    DECAY_TIERS
        .iter()
        .find(|(threshold, _)| games_played >= *threshold)
        .map(|(_, magnitude)| *magnitude)
}
