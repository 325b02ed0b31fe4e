//! Notifications published to the presentation layer.

use super::{CardId, Position, Word};
use serde::{Deserialize, Serialize};

/// Category of a result message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResultKind {
    /// Every word correct.
    Success,
    /// Some words correct, attempts remain.
    Partial,
    /// Attempts exhausted.
    Failure,
}

/// A state change the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A puzzle was loaded. `number` is 1-based and absent for the built-in puzzle.
    PuzzleLoaded {
        /// Puzzle number within the collection.
        number: Option<usize>,
        /// Clues in corner order.
        clues: [String; 4],
    },
    /// Card states or the selection changed.
    CardPoolChanged {
        /// Currently selected card.
        selected: Option<CardId>,
    },
    /// A position's content or lock changed.
    BoardChanged {
        /// The position.
        position: Position,
        /// Word now shown there.
        word: Option<Word>,
        /// Whether the position is locked.
        locked: bool,
    },
    /// Wrong positions after a partial submit. Clear them after the unflag delay.
    IncorrectFlagged(Vec<Position>),
    /// Incorrect markers removed.
    FlagsCleared(Vec<Position>),
    /// Attempts left after a failed submit.
    AttemptsChanged(u8),
    /// Whether submit is currently allowed.
    SubmitEnabled(bool),
    /// Outcome of a submit.
    Result {
        /// Message category.
        kind: ResultKind,
        /// Text to show.
        message: String,
    },
    /// A solution word was forced into a position after the last attempt failed.
    SolutionRevealed {
        /// The position.
        position: Position,
        /// Its solution word.
        word: Word,
    },
}
