//! Intersections - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use intersections::{
    Corner, GameConfig, Puzzle, PuzzleCollection, load_daily, run_tui, source_for, today,
};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Log destination while the terminal UI is running.
const LOG_FILE: &str = "intersections.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if matches!(cli.command, Command::Play { .. }) {
        // The terminal UI owns the screen, so logs go to a file.
        let log_file = std::fs::File::create(LOG_FILE)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Command::Play {
            config,
            puzzles,
            seed,
        } => {
            let mut config = load_config(&config, puzzles)?;
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_play(config).await
        }
        Command::Today { config, puzzles } => run_today(load_config(&config, puzzles)?).await,
        Command::Validate { file } => run_validate(&file).await,
    }
}

/// Config file, then environment, then command line.
fn load_config(path: &Path, puzzles: Option<String>) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(path)?.with_env_overrides();
    Ok(match puzzles {
        Some(puzzles) => config.with_puzzles(puzzles),
        None => config,
    })
}

/// Play today's puzzle in the terminal UI
#[instrument(skip_all)]
async fn run_play(config: GameConfig) -> Result<()> {
    let source = source_for(config.puzzles());
    let loaded = load_daily(source.as_ref(), today()).await;
    info!(number = ?loaded.number, "Starting game");

    let session = run_tui(&config, loaded).await?;
    info!(phase = ?session.phase(), "Game finished");
    Ok(())
}

/// Print today's puzzle number and clues
#[instrument(skip_all)]
async fn run_today(config: GameConfig) -> Result<()> {
    let source = source_for(config.puzzles());
    let loaded = load_daily(source.as_ref(), today()).await;

    match loaded.number {
        Some(n) => println!("Puzzle #{}", n),
        None => println!("Practice puzzle (no collection available)"),
    }
    for corner in Corner::ALL {
        let (a, b) = corner.positions();
        let pair = format!("{} / {}", a.label(), b.label());
        println!("  {:<16} {}", pair, loaded.puzzle.clue(corner));
    }
    Ok(())
}

/// Validate every puzzle in a collection file
#[instrument]
async fn run_validate(file: &Path) -> Result<()> {
    let json = tokio::fs::read_to_string(file).await?;
    let collection = PuzzleCollection::from_json(&json)?;
    if collection.is_empty() {
        bail!("{} contains no puzzles", file.display());
    }

    let mut failures = 0;
    for (index, record) in collection.puzzles.into_iter().enumerate() {
        match Puzzle::try_from(record) {
            Ok(_) => println!("#{:<4} ok", index + 1),
            Err(e) => {
                failures += 1;
                println!("#{:<4} {}", index + 1, e);
            }
        }
    }

    if failures > 0 {
        bail!("{} invalid puzzle(s) in {}", failures, file.display());
    }
    Ok(())
}
