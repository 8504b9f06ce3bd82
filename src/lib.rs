//! Terminal esports club management simulation.
//!
//! You run a five-player club through league cycles and knockout
//! tournaments while an AI-driven transfer economy churns around you.
//! All randomness flows through injected [`rand::Rng`] handles, so whole
//! seasons replay deterministically from a seed; the balance simulator in
//! [`simulator`] leans on that to play thousands of unattended seasons.

pub mod build_info;
pub mod constants;
pub mod errors;
pub mod game_state;
pub mod input;
pub mod league;
pub mod market;
pub mod match_engine;
pub mod player;
pub mod simulator;
pub mod skills;
pub mod team;
pub mod tournament;
pub mod transfer_ai;
pub mod ui;
