//! Tournament CLI
//!
//! Play matches and round robins between the computer opponents.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use tournament::{run_round_robin, AiKind, MatchRunner, TournamentConfig, TournamentResults};

fn print_usage() {
    println!("Chess Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <ai1> <ai2> [--games N] [--depth D] [--max-moves M] [--seed S] [--out FILE]");
    println!("  tournament round-robin --config FILE [--out FILE]");
    println!("  tournament help");
    println!();
    println!("Opponents:");
    println!("  random        - Random piece, random legal move");
    println!("  minimax       - Minimax, depth 2");
    println!("  alphabeta     - Alpha-beta, depth 3");
    println!("  expert        - Alpha-beta, depth 4");
    println!("  aggressive    - Alpha-beta with center and attack bonuses");
    println!("  defensive     - Alpha-beta with king shelter bonuses");
    println!();
    println!("Logging is controlled by RUST_LOG (default: info).");
    println!();
    println!("Examples:");
    println!("  tournament match random alphabeta --games 4");
    println!("  tournament round-robin --config tournament.toml --out results.json");
}

/// Value following `flag`, parsed.
fn flag_value<T>(args: &[String], i: usize, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = args.get(i + 1) else {
        bail!("{flag} needs a value");
    };
    raw.parse()
        .with_context(|| format!("invalid value {raw:?} for {flag}"))
}

fn save_results(results: &TournamentResults, out: Option<&Path>) -> Result<()> {
    if let Some(path) = out {
        results
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two opponents");
    }

    let first: AiKind = args[0].parse()?;
    let second: AiKind = args[1].parse()?;

    let mut config = TournamentConfig {
        name: format!("{first} vs {second}"),
        games_per_match: 10,
        players: vec![first, second],
        ..Default::default()
    };
    let mut out: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => config.games_per_match = flag_value(args, i, "--games")?,
            "--depth" | "-d" => config.depth = Some(flag_value(args, i, "--depth")?),
            "--max-moves" | "-m" => {
                config.max_moves_per_game = flag_value(args, i, "--max-moves")?
            }
            "--seed" | "-s" => config.seed = Some(flag_value(args, i, "--seed")?),
            "--out" | "-o" => out = Some(flag_value(args, i, "--out")?),
            other => bail!("unknown option {other:?}"),
        }
        i += 2;
    }

    println!("=== Match: {first} vs {second} ===");
    println!(
        "Games: {}, Max plies: {}",
        config.games_per_match, config.max_moves_per_game
    );
    println!();

    let runner = MatchRunner::new(config.match_config());
    let result = runner.run_match(first, second)?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{first}: {} wins, {} losses, {} draws",
        result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut results = TournamentResults::new(
        &config.name,
        vec![first.to_string(), second.to_string()],
        config.clone(),
    );
    results.add_match(first.as_str(), second.as_str(), result);
    save_results(&results, out.as_deref())
}

fn run_tournament(args: &[String]) -> Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => config_path = Some(flag_value(args, i, "--config")?),
            "--out" | "-o" => out = Some(flag_value(args, i, "--out")?),
            other => bail!("unknown option {other:?}"),
        }
        i += 2;
    }

    let config = match config_path {
        Some(path) => TournamentConfig::load(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TournamentConfig::default(),
    };

    println!("=== {} ===", config.name);
    let results = run_round_robin(&config)?;
    println!("{}", results.generate_report());
    save_results(&results, out.as_deref())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "round-robin" | "rr" => run_tournament(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}

