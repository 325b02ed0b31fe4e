//! Single owner of the session, forwarding events to the presentation layer.

use super::{Action, ActionError, CardId, GameEvent, GameSession, Position};
use tracing::{instrument, trace};

/// Receives state-change notifications.
///
/// The observer is handed the session alongside each event so it can
/// re-read whatever it renders (pool order, slot contents, ...).
pub trait GameObserver {
    /// Called once per event, in order.
    fn on_event(&mut self, session: &GameSession, event: &GameEvent);

    /// Called after the last event of a non-empty batch.
    fn on_batch_end(&mut self, _session: &GameSession) {}
}

impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, _session: &GameSession, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Owns the session and routes user intents into it.
#[derive(Debug)]
pub struct GameController<O> {
    session: GameSession,
    observer: O,
}

impl<O: GameObserver> GameController<O> {
    /// Takes ownership of a session and announces the loaded puzzle.
    #[instrument(skip_all, fields(number = ?session.number()))]
    pub fn new(session: GameSession, observer: O) -> Self {
        let mut controller = Self { session, observer };
        let events = controller.session.loaded_events();
        controller.publish(events);
        controller
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Session and observer together, for rendering on demand.
    pub fn parts_mut(&mut self) -> (&GameSession, &mut O) {
        (&self.session, &mut self.observer)
    }

    /// Routes an intent into the session, reporting why it was rejected.
    ///
    /// Nothing is published for a rejected intent.
    #[instrument(skip(self))]
    pub fn try_dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        let events = self.session.try_apply(action)?;
        self.publish(events);
        Ok(())
    }

    /// Routes an intent into the session; rejected intents are ignored.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        let events = self.session.apply(action);
        self.publish(events);
    }

    /// Toggles selection of a pool card.
    pub fn select_card(&mut self, id: CardId) {
        self.dispatch(Action::Select(id));
    }

    /// Puts the selected card on a position.
    pub fn place_card(&mut self, pos: Position) {
        self.dispatch(Action::Place(pos));
    }

    /// Returns the card on a position to the pool.
    pub fn remove_card(&mut self, pos: Position) {
        self.dispatch(Action::Remove(pos));
    }

    /// Checks the board.
    pub fn submit(&mut self) {
        self.dispatch(Action::Submit);
    }

    /// Clears every unlocked position.
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// Removes stale incorrect markers; safe in any phase.
    pub fn clear_flags(&mut self, positions: &[Position]) {
        let events = self.session.clear_flags(positions);
        self.publish(events);
    }

    /// Gives up the session and observer.
    pub fn into_parts(self) -> (GameSession, O) {
        (self.session, self.observer)
    }

    fn publish(&mut self, events: Vec<GameEvent>) {
        for event in &events {
            trace!(?event, "Publishing event");
            self.observer.on_event(&self.session, event);
        }
        if !events.is_empty() {
            self.observer.on_batch_end(&self.session);
        }
    }
}
