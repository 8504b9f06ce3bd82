use csmanager::build_info;
use csmanager::constants::ROSTER_SIZE;
use csmanager::game_state::GameState;
use csmanager::input::{parse_index, parse_selection, prompt};
use csmanager::ui;
use std::io;

const DEFAULT_TEAM_NAME: &str = "MyTeam";
const ACTIVITY_WINDOW: usize = 10;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "csmanager {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("csmanager - Terminal esports club management\n");
                println!("Usage: csmanager [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'csmanager --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    println!("Welcome to the club, boss!");
    let name = prompt("Name your team: ")?;
    let name = if name.is_empty() {
        DEFAULT_TEAM_NAME.to_string()
    } else {
        name
    };

    let mut rng = rand::thread_rng();
    let mut state = GameState::new(name, &mut rng);

    loop {
        print!("{}", ui::render_menu());
        let choice = prompt("> ")?;
        match choice.as_str() {
            "1" => print!("{}", ui::render_team(&state.human)),
            "2" => run_bootcamp(&mut state, &mut rng)?,
            "3" => {
                let events = state.play_league_match(&mut rng);
                print!("{}", ui::render_league_events(state.human.name(), &events));
            }
            "4" => match state.enter_tournament(&mut rng) {
                Ok(report) => print!("{}", ui::render_tournament(&report)),
                Err(error) => println!("{error}"),
            },
            "5" => run_market(&mut state, &mut rng)?,
            "6" => print!("{}", ui::render_finances(&state.human)),
            "7" => print!("{}", ui::render_standings(&state.standings())),
            "8" => print!(
                "{}",
                ui::render_activity(state.recent_activity(ACTIVITY_WINDOW))
            ),
            "9" => print!("{}", ui::render_trophy_ranking(&state.trophy_ranking())),
            "10" => {
                println!("Thanks for playing, boss!");
                return Ok(());
            }
            _ => println!("Pick an option between 1 and 10."),
        }
    }
}

fn run_bootcamp(state: &mut GameState, rng: &mut impl rand::Rng) -> io::Result<()> {
    print!("{}", ui::render_team(&state.human));
    let raw = prompt("Players to send (numbers or 'all'): ")?;
    let selection = parse_selection(&raw, ROSTER_SIZE);
    match state.send_to_bootcamp(&selection, rng) {
        Ok(cost) => println!("Bootcamp complete for {} players (${cost}).", selection.len()),
        Err(error) => println!("{error}"),
    }
    Ok(())
}

fn run_market(state: &mut GameState, rng: &mut impl rand::Rng) -> io::Result<()> {
    loop {
        print!("{}", ui::render_market(&state.market, &state.human));
        println!("\n(b)uy, (s)ell, or (e)xit?");
        let choice = prompt("> ")?;
        match choice.as_str() {
            "b" | "buy" => {
                let Some(market_index) = parse_index(&prompt("Listing number: ")?) else {
                    println!("That's not a listing number.");
                    continue;
                };
                let Some(roster_slot) = parse_index(&prompt("Roster slot to replace: ")?) else {
                    println!("That's not a roster slot.");
                    continue;
                };
                match state.market_buy(market_index, roster_slot) {
                    Ok((name, price)) => println!("Signed {name} for ${price}."),
                    Err(error) => println!("{error}"),
                }
            }
            "s" | "sell" => {
                let Some(roster_slot) = parse_index(&prompt("Roster slot to sell: ")?) else {
                    println!("That's not a roster slot.");
                    continue;
                };
                match state.market_sell(roster_slot, rng) {
                    Ok((name, proceeds)) => println!("Sold {name} for ${proceeds}."),
                    Err(error) => println!("{error}"),
                }
            }
            "e" | "exit" => return Ok(()),
            _ => println!("Pick b, s, or e."),
        }
    }
}
