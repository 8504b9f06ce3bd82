//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 seasons of 50 cycles
//!   cargo run --bin simulate -- -n 100 -c 20   # 100 short seasons
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use csmanager::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CSMANAGER BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Seasons:          {}", config.num_runs);
    println!("  Cycles/Season:    {}", config.cycles_per_run);
    if config.tournament_every > 0 {
        println!("  Tournament every: {} cycles", config.tournament_every);
    } else {
        println!("  Tournaments:      disabled");
    }
    if let Some(seed) = config.seed {
        println!("  Seed:             {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(error) => eprintln!("Failed to write JSON report: {error}"),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-c" | "--cycles" => {
                if i + 1 < args.len() {
                    config.cycles_per_run = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "-t" | "--tournament-every" => {
                if i + 1 < args.len() {
                    config.tournament_every = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--no-tournaments" => {
                config.tournament_every = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick_test();
            }
            "--decay" => {
                config = SimConfig::decay_study();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("CSManager Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>              Number of seasons (default: 1000)");
    println!("    -c, --cycles <C>            League cycles per season (default: 50)");
    println!("    -t, --tournament-every <T>  Enter a tournament every T cycles (default: 10)");
    println!("    -s, --seed <S>              Random seed for reproducibility");
    println!("    --no-tournaments            Skip tournament entries");
    println!("    -v, --verbose               Per-season output");
    println!("    --json                      Save JSON report");
    println!("    --quick                     Quick test (100 seasons of 20 cycles)");
    println!("    --decay                     Long seasons to study career decay");
    println!("    -h, --help                  Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default run");
    println!("    cargo run --bin simulate -- -n 100 -c 20   # 100 short seasons");
    println!("    cargo run --bin simulate -- --seed 42      # Reproducible");
    println!("    cargo run --bin simulate -- --decay        # Career decay study");
}
