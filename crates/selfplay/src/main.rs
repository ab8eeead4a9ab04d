//! Self-play CLI
//!
//! Plays engine-vs-engine games and prints a report.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use selfplay::{MatchConfig, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [match.toml]");
    println!();
    println!("Without a file, two default alpha-beta engines play two games.");
    println!("Set RUST_LOG=debug to see every move and search summary.");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1).map(String::as_str) {
        Some("help" | "--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(path) => MatchConfig::load(Path::new(path))
            .with_context(|| format!("loading match config from {path}"))?,
        None => MatchConfig::default(),
    };

    info!(
        engine1 = %config.engine1.label(),
        engine2 = %config.engine2.label(),
        games = config.games,
        "starting match"
    );

    let runner = MatchRunner::new(config);
    let record = runner.run_match().context("match aborted")?;
    println!("{}", record.generate_report());

    if let Some(path) = &runner.config().record_path {
        record
            .save(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("writing match record to {}", path.display()))?;
        info!(path = %path.display(), "match record written");
    }

    Ok(())
}
