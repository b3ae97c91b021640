//! Headless runner (default binary).
//!
//! Plays a number of games with a gravity timer and a random player, then
//! prints a summary. Nothing is drawn; set `RUST_LOG=debug` to follow along.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use blocktris::driver::{self, RunLimits};
use blocktris::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "blocktris", about = "Play falling-block games without a screen")]
struct Cli {
    /// Settings file (TOML); defaults are used if it does not exist
    #[arg(long, default_value = "blocktris.toml")]
    config: PathBuf,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Give up on a game after this many gravity ticks
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u32,

    /// Piece seed, overrides the settings file
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many times faster than real time, overrides the settings file
    #[arg(long)]
    speedup: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        settings.session.seed = Some(seed);
    }
    if let Some(speedup) = cli.speedup {
        settings.driver.speedup = speedup;
    }
    settings.validate().context("command line overrides")?;

    info!(
        "playing {} game(s), gravity {}ms, speedup x{}",
        cli.games, settings.session.gravity_ms, settings.driver.speedup
    );

    let reports = driver::run(
        &settings,
        RunLimits {
            games: cli.games,
            max_ticks: cli.max_ticks,
        },
    );

    let best = reports.iter().map(|r| r.score).max().unwrap_or(0);
    let total_lines: u32 = reports.iter().map(|r| r.lines).sum();
    println!(
        "games: {}  best score: {}  total lines: {}",
        reports.len(),
        best,
        total_lines
    );

    Ok(())
}
