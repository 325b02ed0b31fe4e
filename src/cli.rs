//! Command-line interface for intersections.

use clap::{Parser, Subcommand};

/// Intersections - daily four-corner word association puzzle
#[derive(Parser, Debug)]
#[command(name = "intersections")]
#[command(about = "Daily four-corner word association puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play today's puzzle in the terminal
    Play {
        /// Path to config file
        #[arg(short, long, default_value = "intersections.toml")]
        config: std::path::PathBuf,

        /// Puzzle collection (file path or URL), overrides the config
        #[arg(long)]
        puzzles: Option<String>,

        /// Shuffle seed, overrides the config
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print today's puzzle number and clues
    Today {
        /// Path to config file
        #[arg(short, long, default_value = "intersections.toml")]
        config: std::path::PathBuf,

        /// Puzzle collection (file path or URL), overrides the config
        #[arg(long)]
        puzzles: Option<String>,
    },

    /// Check every puzzle in a collection file
    Validate {
        /// Puzzle collection file
        file: std::path::PathBuf,
    },
}
