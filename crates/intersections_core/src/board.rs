//! The four-position board.

use super::{CardId, Position};
use serde::{Deserialize, Serialize};

/// A single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slot {
    /// Card sitting here, if any.
    pub card: Option<CardId>,
    /// Confirmed correct; never edited again.
    pub locked: bool,
    /// Transient marker after a wrong guess.
    pub flagged: bool,
}

/// Which card sits where, and which positions are locked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    slots: [Slot; 4],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot at a position.
    pub fn slot(&self, pos: Position) -> &Slot {
        &self.slots[pos.to_index()]
    }

    /// Card at a position.
    pub fn card_at(&self, pos: Position) -> Option<CardId> {
        self.slot(pos).card
    }

    /// Returns true if the position is locked.
    pub fn is_locked(&self, pos: Position) -> bool {
        self.slot(pos).locked
    }

    /// Returns true if the position is flagged incorrect.
    pub fn is_flagged(&self, pos: Position) -> bool {
        self.slot(pos).flagged
    }

    /// Position holding a card, if any.
    pub fn position_of(&self, id: CardId) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.card_at(*pos) == Some(id))
    }

    /// Number of filled positions.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.card.is_some()).count()
    }

    /// Returns true if every position holds a card.
    pub fn is_full(&self) -> bool {
        self.filled_count() == Position::ALL.len()
    }

    /// Positions that are locked.
    pub fn locked_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_locked(*pos))
            .collect()
    }

    /// Filled positions with their cards, in evaluation order.
    pub fn placements(&self) -> impl Iterator<Item = (Position, CardId)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(move |pos| self.card_at(pos).map(|id| (pos, id)))
    }

    /// Writes a card into a position, returning the card it displaced.
    pub(crate) fn put(&mut self, pos: Position, id: CardId) -> Option<CardId> {
        self.slots[pos.to_index()].card.replace(id)
    }

    /// Empties a position, returning its card.
    pub(crate) fn take(&mut self, pos: Position) -> Option<CardId> {
        self.slots[pos.to_index()].card.take()
    }

    pub(crate) fn lock(&mut self, pos: Position) {
        let slot = &mut self.slots[pos.to_index()];
        slot.locked = true;
        slot.flagged = false;
    }

    pub(crate) fn set_flagged(&mut self, pos: Position, flagged: bool) {
        self.slots[pos.to_index()].flagged = flagged;
    }
}
