//! Core domain types for the intersections puzzle.

use super::Position;
use serde::{Deserialize, Serialize};

/// The text printed on a card.
pub type Word = String;

/// Stable identifier of a card, issued when the pool is generated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("#{}", _0)]
pub struct CardId(pub u16);

impl CardId {
    /// Index of this card in the pool.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Lifecycle of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Waiting in the pool.
    InPool,
    /// Picked up, waiting to be placed.
    Selected,
    /// Sitting on an editable position.
    Placed(Position),
    /// Sitting on a locked position; never moves again.
    Locked(Position),
}

impl CardState {
    /// Position the card occupies, if any.
    pub fn position(self) -> Option<Position> {
        match self {
            CardState::Placed(pos) | CardState::Locked(pos) => Some(pos),
            CardState::InPool | CardState::Selected => None,
        }
    }

    /// Returns true if the card is on the board.
    pub fn is_on_board(self) -> bool {
        self.position().is_some()
    }
}

/// A word card in the playable pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    word: Word,
    state: CardState,
}

impl Card {
    /// Creates a card waiting in the pool.
    pub fn new(id: CardId, word: impl Into<Word>) -> Self {
        Self {
            id,
            word: word.into(),
            state: CardState::InPool,
        }
    }

    /// Returns the card id.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> CardState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CardState) {
        self.state = state;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.word)
    }
}
