//! The puzzle session: one puzzle, its pool, its board, its attempts.
//!
//! Every user intent goes through [`GameSession::try_apply`], which checks
//! the action contract, mutates the session and returns the events the
//! presentation layer should render. The convenience methods
//! (`select_card`, `place_card`, ...) swallow rejected intents: an
//! invalid click simply does nothing.

use super::action::{Action, ActionError};
use super::contracts::{ActionContract, Contract};
use super::event::{GameEvent, ResultKind};
use super::rules::{self, FAILURE_MESSAGE, MAX_ATTEMPTS, SUCCESS_MESSAGE};
use super::{Board, CardId, CardPool, Phase, Position, Puzzle};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// State of one puzzle being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) puzzle: Puzzle,
    pub(crate) number: Option<usize>,
    pub(crate) pool: CardPool,
    pub(crate) board: Board,
    pub(crate) attempts_remaining: u8,
    pub(crate) phase: Phase,
}

impl GameSession {
    /// Starts a session for a puzzle with a freshly shuffled pool.
    ///
    /// `number` is the 1-based puzzle number, `None` for the built-in puzzle.
    #[instrument(skip(puzzle, rng))]
    pub fn new<R: Rng + ?Sized>(puzzle: Puzzle, number: Option<usize>, rng: &mut R) -> Self {
        let pool = CardPool::generate(&puzzle, rng);
        info!(cards = pool.len(), "Starting puzzle session");
        Self {
            puzzle,
            number,
            pool,
            board: Board::new(),
            attempts_remaining: MAX_ATTEMPTS,
            phase: Phase::Playing,
        }
    }

    /// Returns the puzzle.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the 1-based puzzle number, if the puzzle came from a collection.
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    /// Returns the card pool.
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Attempts left.
    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the game is won or lost.
    pub fn game_complete(&self) -> bool {
        self.phase.is_complete()
    }

    /// Submit is enabled iff all four positions are filled and the game is running.
    pub fn submit_enabled(&self) -> bool {
        self.board.is_full() && !self.game_complete()
    }

    /// Word printed on a card.
    pub fn word(&self, id: CardId) -> Option<&str> {
        self.pool.get(id).map(|card| card.word())
    }

    /// Word currently shown at a position.
    pub fn word_at(&self, pos: Position) -> Option<&str> {
        self.board.card_at(pos).and_then(|id| self.word(id))
    }

    /// Events describing the freshly loaded puzzle.
    pub fn loaded_events(&self) -> Vec<GameEvent> {
        vec![
            GameEvent::PuzzleLoaded {
                number: self.number,
                clues: self.puzzle.clues().clone(),
            },
            GameEvent::CardPoolChanged {
                selected: self.pool.selected(),
            },
            GameEvent::AttemptsChanged(self.attempts_remaining),
            GameEvent::SubmitEnabled(self.submit_enabled()),
        ]
    }

    /// Applies an action, or explains why it cannot be applied.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only; a failure restores
    ///   the session to its state before the action
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn try_apply(&mut self, action: Action) -> Result<Vec<GameEvent>, ActionError> {
        ActionContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let events = match action {
            Action::Select(id) => self.apply_select(id),
            Action::Place(pos) => self.apply_place(pos),
            Action::Remove(pos) => self.apply_remove(pos),
            Action::Submit => self.apply_submit(),
            Action::Reset => self.apply_reset(),
        };

        #[cfg(debug_assertions)]
        if let Err(violation) = ActionContract::post(&before, self) {
            *self = before;
            return Err(violation);
        }

        Ok(events)
    }

    /// Applies an action; rejected actions are ignored.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Vec<GameEvent> {
        match self.try_apply(action) {
            Ok(events) => events,
            Err(ActionError::InvariantViolation(reason)) => {
                warn!(%action, %reason, "Action broke a session invariant");
                Vec::new()
            }
            Err(reason) => {
                debug!(%action, %reason, "Ignored action");
                Vec::new()
            }
        }
    }

    /// Toggles selection of a pool card.
    pub fn select_card(&mut self, id: CardId) -> Vec<GameEvent> {
        self.apply(Action::Select(id))
    }

    /// Puts the selected card on a position.
    pub fn place_card(&mut self, pos: Position) -> Vec<GameEvent> {
        self.apply(Action::Place(pos))
    }

    /// Returns the card on a position to the pool.
    pub fn remove_card(&mut self, pos: Position) -> Vec<GameEvent> {
        self.apply(Action::Remove(pos))
    }

    /// Checks the board.
    pub fn submit(&mut self) -> Vec<GameEvent> {
        self.apply(Action::Submit)
    }

    /// Clears every unlocked position and the selection.
    pub fn reset_board(&mut self) -> Vec<GameEvent> {
        self.apply(Action::Reset)
    }

    /// Removes incorrect markers from the given positions.
    ///
    /// Runs after the unflag delay. Valid in every phase: positions that
    /// have since been reset, locked or revealed are skipped.
    #[instrument(skip(self))]
    pub fn clear_flags(&mut self, positions: &[Position]) -> Vec<GameEvent> {
        let cleared: Vec<Position> = positions
            .iter()
            .copied()
            .filter(|pos| self.board.is_flagged(*pos))
            .collect();
        for pos in &cleared {
            self.board.set_flagged(*pos, false);
        }
        if cleared.is_empty() {
            Vec::new()
        } else {
            debug!(?cleared, "Cleared incorrect markers");
            vec![GameEvent::FlagsCleared(cleared)]
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions (preconditions already checked)
    // ─────────────────────────────────────────────────────────────

    fn apply_select(&mut self, id: CardId) -> Vec<GameEvent> {
        let selected = self.pool.toggle(id);
        debug!(card = %id, ?selected, "Selection changed");
        vec![GameEvent::CardPoolChanged { selected }]
    }

    fn apply_place(&mut self, pos: Position) -> Vec<GameEvent> {
        let Some(id) = self.pool.selected() else {
            return Vec::new();
        };
        if let Some(displaced) = self.board.put(pos, id) {
            debug!(card = %displaced, %pos, "Displaced card returned to pool");
            self.pool.release(displaced);
        }
        self.pool.place(id, pos);
        debug!(card = %id, %pos, "Placed card");

        vec![
            GameEvent::CardPoolChanged { selected: None },
            self.board_changed(pos),
            GameEvent::SubmitEnabled(self.submit_enabled()),
        ]
    }

    fn apply_remove(&mut self, pos: Position) -> Vec<GameEvent> {
        if let Some(id) = self.board.take(pos) {
            self.pool.release(id);
            debug!(card = %id, %pos, "Removed card");
        }
        self.board.set_flagged(pos, false);

        vec![
            GameEvent::CardPoolChanged {
                selected: self.pool.selected(),
            },
            self.board_changed(pos),
            GameEvent::SubmitEnabled(self.submit_enabled()),
        ]
    }

    fn apply_submit(&mut self) -> Vec<GameEvent> {
        let evaluation = rules::evaluate(&self.puzzle, &self.board, &self.pool);
        info!(
            correct = evaluation.correct.len(),
            incorrect = evaluation.incorrect.len(),
            attempts = self.attempts_remaining,
            "Evaluated submission"
        );

        let mut events = Vec::new();

        if evaluation.is_perfect() {
            for pos in evaluation.correct {
                self.lock(pos);
                events.push(self.board_changed(pos));
            }
            self.phase = Phase::WonPerfect;
            info!("Puzzle solved");
            events.push(GameEvent::Result {
                kind: ResultKind::Success,
                message: SUCCESS_MESSAGE.to_string(),
            });
            self.finish(&mut events);
            return events;
        }

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        events.push(GameEvent::AttemptsChanged(self.attempts_remaining));

        if self.attempts_remaining > 0 {
            let message = rules::partial_message(&evaluation);
            for pos in &evaluation.correct {
                self.lock(*pos);
                events.push(self.board_changed(*pos));
            }
            for pos in &evaluation.incorrect {
                self.board.set_flagged(*pos, true);
            }
            info!(attempts = self.attempts_remaining, "Partial solution, retry allowed");
            events.push(GameEvent::IncorrectFlagged(evaluation.incorrect));
            events.push(GameEvent::Result {
                kind: ResultKind::Partial,
                message,
            });
            events.push(GameEvent::SubmitEnabled(self.submit_enabled()));
        } else {
            self.reveal(&mut events);
            self.phase = Phase::LostRevealed;
            info!("Attempts exhausted, solution revealed");
            events.push(GameEvent::Result {
                kind: ResultKind::Failure,
                message: FAILURE_MESSAGE.to_string(),
            });
            self.finish(&mut events);
        }

        events
    }

    fn apply_reset(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for pos in Position::ALL {
            if self.board.is_locked(pos) {
                continue;
            }
            self.board.set_flagged(pos, false);
            if let Some(id) = self.board.take(pos) {
                self.pool.release(id);
                events.push(self.board_changed(pos));
            }
        }
        self.pool.clear_selection();
        debug!(cleared = events.len(), "Board reset");

        events.push(GameEvent::CardPoolChanged { selected: None });
        events.push(GameEvent::SubmitEnabled(self.submit_enabled()));
        events
    }

    // ─────────────────────────────────────────────────────────────
    //  Helpers
    // ─────────────────────────────────────────────────────────────

    fn lock(&mut self, pos: Position) {
        if let Some(id) = self.board.card_at(pos) {
            self.pool.lock(id, pos);
        }
        self.board.lock(pos);
    }

    /// Forces the solution into every unlocked position.
    ///
    /// All unlocked positions are vacated first so a solution card sitting
    /// on the wrong position can move to its own.
    fn reveal(&mut self, events: &mut Vec<GameEvent>) {
        self.pool.clear_selection();
        let open: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| !self.board.is_locked(*pos))
            .collect();

        for pos in &open {
            if let Some(id) = self.board.take(*pos) {
                self.pool.release(id);
            }
        }

        for pos in open {
            let word = self.puzzle.solution().get(pos).to_string();
            match self.pool.find_word(&word).map(|card| card.id()) {
                Some(id) => {
                    self.board.put(pos, id);
                    self.lock(pos);
                }
                None => warn!(%pos, %word, "Solution word missing from pool"),
            }
            events.push(self.board_changed(pos));
            events.push(GameEvent::SolutionRevealed {
                position: pos,
                word,
            });
        }
    }

    fn finish(&mut self, events: &mut Vec<GameEvent>) {
        self.pool.clear_selection();
        events.push(GameEvent::CardPoolChanged { selected: None });
        events.push(GameEvent::SubmitEnabled(false));
    }

    fn board_changed(&self, pos: Position) -> GameEvent {
        GameEvent::BoardChanged {
            position: pos,
            word: self.word_at(pos).map(str::to_string),
            locked: self.board.is_locked(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardState;
    use crate::test_support::{card, new_session, place_words};

    #[test]
    fn test_new_session_is_empty() {
        let session = new_session();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.attempts_remaining(), 2);
        assert_eq!(session.board().filled_count(), 0);
        assert!(!session.submit_enabled());
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_restores_session() {
        let mut session = new_session();
        place_words(&mut session, ["CLOUD", "MOON", "STAR", "PLANET"]);
        // Corrupt: a wrong word locked on top
        session.board.lock(Position::Top);
        let snapshot = session.clone();

        let comet = card(&session, "COMET");
        let result = session.try_apply(Action::Select(comet));

        assert!(matches!(result, Err(ActionError::InvariantViolation(_))));
        assert_eq!(session, snapshot);
        assert_eq!(session.pool().selected(), None);
        assert!(session.select_card(comet).is_empty());
        assert_eq!(session, snapshot);
    }

    #[test]
    fn test_place_displaces_previous_card() {
        let mut session = new_session();
        let sun = card(&session, "SUN");
        let cloud = card(&session, "CLOUD");

        session.select_card(cloud);
        session.place_card(Position::Top);
        session.select_card(sun);
        let events = session.place_card(Position::Top);

        assert_eq!(session.word_at(Position::Top), Some("SUN"));
        assert_eq!(session.pool().get(cloud).map(|c| c.state()), Some(CardState::InPool));
        assert_eq!(
            session.pool().get(sun).map(|c| c.state()),
            Some(CardState::Placed(Position::Top))
        );
        assert!(events.contains(&GameEvent::BoardChanged {
            position: Position::Top,
            word: Some("SUN".to_string()),
            locked: false,
        }));
    }

    #[test]
    fn test_placed_card_cannot_move_without_removal() {
        let mut session = new_session();
        let sun = card(&session, "SUN");
        session.select_card(sun);
        session.place_card(Position::Right);

        assert_eq!(
            session.try_apply(Action::Select(sun)),
            Err(ActionError::CardPlaced(sun))
        );
        assert!(session.place_card(Position::Top).is_empty());
        assert_eq!(session.word_at(Position::Right), Some("SUN"));

        session.remove_card(Position::Right);
        session.select_card(sun);
        session.place_card(Position::Top);
        assert_eq!(session.word_at(Position::Top), Some("SUN"));
        assert_eq!(session.word_at(Position::Right), None);
    }

    #[test]
    fn test_submit_enabled_tracks_fill() {
        let mut session = new_session();
        place_words(&mut session, ["SUN", "MOON", "STAR", "COMET"]);
        assert!(session.submit_enabled());
        session.remove_card(Position::Left);
        assert!(!session.submit_enabled());
        assert!(session.submit().is_empty());
        assert_eq!(session.attempts_remaining(), 2);
    }

    #[test]
    fn test_clear_flags_is_harmless_after_reset() {
        let mut session = new_session();
        place_words(&mut session, ["CLOUD", "MOON", "STAR", "PLANET"]);
        session.submit();
        assert!(session.board().is_flagged(Position::Top));

        session.reset_board();
        assert!(!session.board().is_flagged(Position::Top));
        assert!(session.clear_flags(&[Position::Top]).is_empty());
    }

    #[test]
    fn test_clear_flags_after_timer() {
        let mut session = new_session();
        place_words(&mut session, ["CLOUD", "COMET", "STAR", "PLANET"]);
        session.submit();

        let events = session.clear_flags(&[Position::Top, Position::Right]);
        assert_eq!(
            events,
            vec![GameEvent::FlagsCleared(vec![Position::Top, Position::Right])]
        );
        assert_eq!(session.word_at(Position::Top), Some("CLOUD"));
    }

    #[test]
    fn test_reveal_moves_misplaced_solution_card() {
        let mut session = new_session();
        place_words(&mut session, ["MOON", "SUN", "STAR", "PLANET"]);
        session.submit();
        let events = session.submit();

        assert_eq!(session.phase(), Phase::LostRevealed);
        assert_eq!(session.word_at(Position::Top), Some("SUN"));
        assert_eq!(session.word_at(Position::Right), Some("MOON"));
        let revealed: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::SolutionRevealed { .. }))
            .collect();
        assert_eq!(revealed.len(), 2);
    }

    #[test]
    fn test_actions_ignored_after_game_over() {
        let mut session = new_session();
        place_words(&mut session, ["SUN", "MOON", "STAR", "PLANET"]);
        session.submit();

        let cloud = card(&session, "CLOUD");
        assert!(session.select_card(cloud).is_empty());
        assert!(session.remove_card(Position::Top).is_empty());
        assert!(session.submit().is_empty());
        assert_eq!(session.try_apply(Action::Submit), Err(ActionError::GameOver));
    }

    #[test]
    fn test_selection_cleared_when_game_ends() {
        let mut session = new_session();
        place_words(&mut session, ["SUN", "MOON", "STAR", "PLANET"]);
        let comet = card(&session, "COMET");
        session.select_card(comet);
        session.submit();
        assert_eq!(session.pool().selected(), None);
    }
}
