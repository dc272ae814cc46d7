//! Battle simulator CLI.
//!
//! Plays many randomized matches through the real engine and prints a
//! balance report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 matches
//!   cargo run --bin simulate -- -n 100 --turns 5 # 100 short matches
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use battle_engine::simulator::{run_simulation, SimConfig};
use battle_engine::BattleConfig;
use std::env;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if config.verbosity >= 2 {
                    "battle_engine=info".into()
                } else {
                    "warn".into()
                }
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 BATTLE ENGINE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Matches:        {}", config.num_runs);
    println!("  Max Turns:      {}", config.battle.max_turns);
    println!("  Turn Duration:  {}s", config.battle.turn_duration_secs);
    println!("  Roster Size:    {}", config.battle.max_roster_size);
    println!("  Summon Chance:  {}", config.summon_chance);
    println!("  Death Chance:   {}", config.death_chance);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "battle_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
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
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--turns" => {
                if i + 1 < args.len() {
                    if let Ok(turns) = args[i + 1].parse() {
                        config.battle.max_turns = turns;
                    }
                    i += 1;
                }
            }
            "--roster" => {
                if i + 1 < args.len() {
                    if let Ok(size) = args[i + 1].parse() {
                        config.battle.max_roster_size = size;
                    }
                    i += 1;
                }
            }
            "--summon" => {
                if i + 1 < args.len() {
                    if let Ok(chance) = args[i + 1].parse() {
                        config.summon_chance = chance;
                    }
                    i += 1;
                }
            }
            "--death" => {
                if i + 1 < args.len() {
                    if let Ok(chance) = args[i + 1].parse() {
                        config.death_chance = chance;
                    }
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    match BattleConfig::load(Path::new(&args[i + 1])) {
                        Ok(battle) => config.battle = battle,
                        Err(e) => {
                            eprintln!("{}", e);
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick(100);
            }
            "--bloodbath" => {
                config = SimConfig::bloodbath();
            }
            _ => {}
        }
        i += 1;
    }

    if let Err(e) = config.battle.validate() {
        eprintln!("Invalid battle config: {}", e);
        std::process::exit(1);
    }

    config
}

fn print_help() {
    println!("Battle Engine Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of matches (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -c, --config <F>    Load battle rules from a JSON file");
    println!("    --turns <T>         Turn limit per match (default: 10)");
    println!("    --roster <R>        Max roster size (default: 5)");
    println!("    --summon <P>        Summon attempt chance per tick (default: 0.05)");
    println!("    --death <P>         Death chance per tick (default: 0.005)");
    println!("    -v, --verbose       Log every match");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (100 short matches)");
    println!("    --bloodbath         High attrition preset");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                       # Default run");
    println!("    cargo run --bin simulate -- -n 100 --turns 5   # 100 short matches");
    println!("    cargo run --bin simulate -- --seed 42          # Reproducible");
    println!("    cargo run --bin simulate -- --bloodbath        # Roster wipes");
}
