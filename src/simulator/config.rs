//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of seasons to simulate
    pub num_runs: u32,

    /// League cycles per season
    pub cycles_per_run: u32,

    /// Enter a tournament every N cycles (0 = never)
    pub tournament_every: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            cycles_per_run: 50,
            tournament_every: 10,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check.
    pub fn quick_test() -> Self {
        Self {
            num_runs: 100,
            cycles_per_run: 20,
            ..Default::default()
        }
    }

    /// Long seasons to study career decay past the 100-game wall.
    pub fn decay_study() -> Self {
        Self {
            num_runs: 200,
            cycles_per_run: 150,
            ..Default::default()
        }
    }
}
