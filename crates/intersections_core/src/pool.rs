//! The playable card pool and the current selection.

use super::{Card, CardId, CardState, Position, Puzzle};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Shuffled cards for one puzzle, with at most one selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardPool {
    cards: Vec<Card>,
    selected: Option<CardId>,
}

impl CardPool {
    /// Builds the pool from solution words and decoys in shuffled order.
    ///
    /// Ids follow display order. Shuffle order has no gameplay effect.
    #[instrument(skip(puzzle, rng))]
    pub fn generate<R: Rng + ?Sized>(puzzle: &Puzzle, rng: &mut R) -> Self {
        let mut words: Vec<&str> = puzzle.words().collect();
        words.shuffle(rng);

        // Validated puzzles hold at most MAX_WORDS cards, well inside u16.
        let cards: Vec<Card> = words
            .into_iter()
            .zip(0u16..)
            .map(|(word, i)| Card::new(CardId(i), word))
            .collect();
        debug!(count = cards.len(), "Generated card pool");

        Self {
            cards,
            selected: None,
        }
    }

    /// Returns all cards in display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card with the given id.
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Finds the card carrying a word.
    pub fn find_word(&self, word: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.word() == word)
    }

    /// Returns the currently selected card.
    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the pool holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards not on the board.
    pub fn available(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| !card.state().is_on_board())
    }

    /// Toggles selection of a card that is not on the board.
    ///
    /// Returns the selection afterwards. Callers check that the card
    /// exists and is off the board.
    pub(crate) fn toggle(&mut self, id: CardId) -> Option<CardId> {
        if let Some(previous) = self.selected.take() {
            self.set_state(previous, CardState::InPool);
            if previous == id {
                return None;
            }
        }
        self.set_state(id, CardState::Selected);
        self.selected = Some(id);
        self.selected
    }

    /// Clears the selection, returning the card to the pool.
    pub(crate) fn clear_selection(&mut self) -> Option<CardId> {
        let previous = self.selected.take();
        if let Some(id) = previous {
            self.set_state(id, CardState::InPool);
        }
        previous
    }

    /// Marks a card as sitting on a position.
    pub(crate) fn place(&mut self, id: CardId, pos: Position) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.set_state(id, CardState::Placed(pos));
    }

    /// Marks a card as locked on a position.
    pub(crate) fn lock(&mut self, id: CardId, pos: Position) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.set_state(id, CardState::Locked(pos));
    }

    /// Returns a card to the pool.
    pub(crate) fn release(&mut self, id: CardId) {
        self.set_state(id, CardState::InPool);
    }

    fn set_state(&mut self, id: CardId, state: CardState) {
        if let Some(card) = self.cards.get_mut(id.index()) {
            card.set_state(state);
        }
    }
}
