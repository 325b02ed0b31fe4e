//! Intersections puzzle logic.
//!
//! Four words sit on the four sides of a diamond; each corner carries a
//! clue linking its two neighbours. Players pick cards from a shuffled
//! pool (solution words plus decoys), place them, and get two attempts.
//!
//! # Architecture
//!
//! - **Puzzle**: validated puzzle records and daily selection
//! - **Pool / Board**: card lifecycle and position occupancy
//! - **Rules**: answer checking
//! - **Session**: the attempt/lock/reveal state machine, guarded by contracts
//! - **Controller**: owns a session and feeds events to an observer
//!
//! # Example
//!
//! ```
//! use intersections_core::{GameSession, Phase, Position, Puzzle};
//!
//! let mut session = GameSession::new(Puzzle::fallback(), None, &mut rand::rng());
//! for (pos, word) in [
//!     (Position::Top, "SUN"),
//!     (Position::Right, "MOON"),
//!     (Position::Bottom, "STAR"),
//!     (Position::Left, "PLANET"),
//! ] {
//!     let id = session.pool().find_word(word).map(|c| c.id()).unwrap();
//!     session.select_card(id);
//!     session.place_card(pos);
//! }
//! session.submit();
//! assert_eq!(session.phase(), Phase::WonPerfect);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
mod controller;
mod event;
pub mod invariants;
mod phases;
mod pool;
mod position;
mod puzzle;
pub mod rules;
mod session;
mod types;

pub use action::{Action, ActionError};
pub use board::{Board, Slot};
pub use controller::{GameController, GameObserver};
pub use event::{GameEvent, ResultKind};
pub use phases::{Outcome, Phase};
pub use pool::CardPool;
pub use position::{Corner, Position};
pub use puzzle::{
    CLUE_COUNT, MAX_WORDS, Puzzle, PuzzleCollection, PuzzleError, PuzzleRecord, Solution, daily_index,
};
pub use rules::{Evaluation, MAX_ATTEMPTS};
pub use session::GameSession;
pub use types::{Card, CardId, CardState, Word};
