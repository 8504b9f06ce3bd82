//! Balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of unattended seasons to analyze:
//! - Points and final league position over a season
//! - Money flow under the income/bootcamp/transfer economy
//! - Roster skill drift (improvement vs. career decay)
//! - Tournament win rates against the AI field
//!
//! The simulator drives the real [`crate::game_state::GameState`] command
//! surface, so its numbers match actual gameplay.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, RunStats};
