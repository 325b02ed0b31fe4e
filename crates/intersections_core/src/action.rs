//! First-class action types for the puzzle.
//!
//! Actions are the user intents the presentation layer forwards. They can
//! be checked against a session before anything changes.

use super::{CardId, Position};
use serde::{Deserialize, Serialize};

/// A user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Toggle selection of a pool card.
    Select(CardId),
    /// Put the selected card on a position.
    Place(Position),
    /// Return the card on a position to the pool.
    Remove(Position),
    /// Check the full board.
    Submit,
    /// Clear every unlocked position.
    Reset,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Select(id) => write!(f, "select {}", id),
            Action::Place(pos) => write!(f, "place {}", pos),
            Action::Remove(pos) => write!(f, "remove {}", pos),
            Action::Submit => write!(f, "submit"),
            Action::Reset => write!(f, "reset"),
        }
    }
}

/// Why an action was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// No card has that id.
    #[display("No card {}", _0)]
    UnknownCard(CardId),

    /// The card is already on the board.
    #[display("Card {} is already on the board", _0)]
    CardPlaced(CardId),

    /// Nothing is selected.
    #[display("No card selected")]
    NoSelection,

    /// The position is locked.
    #[display("Position {} is locked", _0)]
    PositionLocked(Position),

    /// The position holds no card.
    #[display("Position {} is empty", _0)]
    PositionEmpty(Position),

    /// Not every position is filled.
    #[display("Only {} of 4 positions filled", _0)]
    BoardIncomplete(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {}
