//! Application state and event handling.

use intersections_core::{Card, CardId, GameEvent, GameObserver, GameSession, Position, ResultKind};
use tracing::debug;

/// View state kept next to the game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    cursor: usize,
    status: String,
    result: Option<ResultKind>,
    flagged: Vec<Vec<Position>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the view state for a fresh puzzle.
    pub fn new() -> Self {
        Self {
            cursor: 0,
            status: "Pick a card with Space, then place it with w/d/s/a.".to_string(),
            result: None,
            flagged: Vec::new(),
        }
    }

    /// Index of the cursor among the pool cards still off the board.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Kind of the last submit result, if any.
    pub fn result(&self) -> Option<ResultKind> {
        self.result
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Card under the cursor.
    pub fn cursor_card<'a>(&self, session: &'a GameSession) -> Option<&'a Card> {
        session.pool().available().nth(self.cursor)
    }

    /// Moves the cursor, wrapping around the available cards.
    pub fn move_cursor(&mut self, session: &GameSession, step: isize) {
        let len = session.pool().available().count();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor as isize + step).rem_euclid(len as isize) as usize;
    }

    /// Incorrect-marker batches that still need an unflag timer.
    pub fn take_flagged(&mut self) -> Vec<Vec<Position>> {
        std::mem::take(&mut self.flagged)
    }

    fn clamp_cursor(&mut self, session: &GameSession) {
        let len = session.pool().available().count();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn describe_selection(&mut self, session: &GameSession, selected: Option<CardId>) {
        if let Some(word) = selected.and_then(|id| session.word(id)) {
            self.status = format!("{} picked. Place it with w/d/s/a.", word);
        }
    }
}

impl GameObserver for App {
    fn on_event(&mut self, session: &GameSession, event: &GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::CardPoolChanged { selected } => self.describe_selection(session, *selected),
            GameEvent::IncorrectFlagged(positions) => self.flagged.push(positions.clone()),
            GameEvent::Result { kind, message } => {
                self.result = Some(*kind);
                self.status = if session.game_complete() {
                    format!("{} Press q to leave.", message)
                } else {
                    message.clone()
                };
            }
            GameEvent::PuzzleLoaded { .. }
            | GameEvent::BoardChanged { .. }
            | GameEvent::FlagsCleared(_)
            | GameEvent::AttemptsChanged(_)
            | GameEvent::SubmitEnabled(_)
            | GameEvent::SolutionRevealed { .. } => {}
        }
    }

    fn on_batch_end(&mut self, session: &GameSession) {
        self.clamp_cursor(session);
    }
}
