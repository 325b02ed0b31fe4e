//! Intersections - a daily four-corner word association puzzle.
//!
//! The game logic lives in [`intersections_core`]; this crate adds what a
//! playable program needs around it.
//!
//! # Architecture
//!
//! - **Source**: fetches the puzzle collection (file or HTTP) and picks today's puzzle
//! - **Config**: TOML settings with environment overrides
//! - **TUI**: ratatui rendering, key bindings and the game loop, including the unflag timer
//!
//! # Example
//!
//! ```no_run
//! use intersections::{GameConfig, load_daily, source_for, today};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let source = source_for(config.puzzles());
//! let loaded = load_daily(source.as_ref(), today()).await;
//! println!("{:?}", loaded.number);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod source;
pub mod tui;

pub use config::{ConfigError, GameConfig, PUZZLES_ENV};
pub use source::{
    FileSource, HttpSource, LoadedPuzzle, PuzzleSource, SourceError, load_daily, source_for, today,
};
pub use tui::{App, play, run_tui};

pub use intersections_core::{
    Action, ActionError, Card, CardId, CardPool, CardState, Corner, GameController, GameEvent,
    GameObserver, GameSession, MAX_ATTEMPTS, MAX_WORDS, Outcome, Phase, Position, Puzzle, PuzzleCollection,
    PuzzleError, PuzzleRecord, ResultKind, Solution,
};
