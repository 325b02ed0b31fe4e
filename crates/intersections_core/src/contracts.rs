//! Contract-based validation for puzzle actions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Action, ActionError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::{CardId, GameSession, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ActionError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not finished.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the session reached a terminal phase.
    pub fn check(session: &GameSession) -> Result<(), ActionError> {
        if session.game_complete() {
            Err(ActionError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the card exists and is not on the board.
pub struct CardSelectable;

impl CardSelectable {
    /// Validates a card for selection.
    #[instrument(skip(session))]
    pub fn check(id: CardId, session: &GameSession) -> Result<(), ActionError> {
        let card = session.pool().get(id).ok_or(ActionError::UnknownCard(id))?;
        if card.state().is_on_board() {
            Err(ActionError::CardPlaced(id))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the position is not locked.
pub struct PositionEditable;

impl PositionEditable {
    /// Fails on locked positions.
    pub fn check(pos: Position, session: &GameSession) -> Result<(), ActionError> {
        if session.board().is_locked(pos) {
            Err(ActionError::PositionLocked(pos))
        } else {
            Ok(())
        }
    }
}

/// Precondition: a card is selected.
pub struct HasSelection;

impl HasSelection {
    /// Fails when nothing is selected.
    pub fn check(session: &GameSession) -> Result<(), ActionError> {
        session
            .pool()
            .selected()
            .map(|_| ())
            .ok_or(ActionError::NoSelection)
    }
}

/// Precondition: the position holds a card.
pub struct PositionFilled;

impl PositionFilled {
    /// Fails on empty positions.
    pub fn check(pos: Position, session: &GameSession) -> Result<(), ActionError> {
        session
            .board()
            .card_at(pos)
            .map(|_| ())
            .ok_or(ActionError::PositionEmpty(pos))
    }
}

/// Precondition: all four positions are filled.
pub struct BoardFull;

impl BoardFull {
    /// Fails while any position is empty.
    pub fn check(session: &GameSession) -> Result<(), ActionError> {
        let filled = session.board().filled_count();
        if session.board().is_full() {
            Ok(())
        } else {
            Err(ActionError::BoardIncomplete(filled))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: locked positions keep their lock and their card.
pub struct LocksPreserved;

impl LocksPreserved {
    /// Compares the locked positions before and after a transition.
    #[instrument(skip_all)]
    pub fn holds(before: &GameSession, after: &GameSession) -> bool {
        before.board().locked_positions().into_iter().all(|pos| {
            let kept = after.board().is_locked(pos)
                && after.board().card_at(pos) == before.board().card_at(pos);
            if !kept {
                warn!(%pos, "Locked position changed");
            }
            kept
        })
    }
}

/// Postcondition: attempts never go up.
pub struct AttemptsMonotonic;

impl AttemptsMonotonic {
    /// Returns true if attempts did not increase.
    pub fn holds(before: &GameSession, after: &GameSession) -> bool {
        after.attempts_remaining() <= before.attempts_remaining()
    }
}

// ─────────────────────────────────────────────────────────────
//  Action Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for all user intents.
///
/// Preconditions:
/// - Select: game running, card exists and is off the board
/// - Place: game running, a card is selected, position unlocked
/// - Remove: game running, position unlocked and filled
/// - Submit: game running, board full
/// - Reset: always allowed
///
/// Postconditions:
/// - Locked positions never change
/// - Attempts never increase
/// - Session invariants hold
pub struct ActionContract;

impl Contract<GameSession, Action> for ActionContract {
    fn pre(session: &GameSession, action: &Action) -> Result<(), ActionError> {
        match *action {
            Action::Select(id) => {
                GameNotOver::check(session)?;
                CardSelectable::check(id, session)
            }
            Action::Place(pos) => {
                HasSelection::check(session)?;
                GameNotOver::check(session)?;
                PositionEditable::check(pos, session)
            }
            Action::Remove(pos) => {
                PositionEditable::check(pos, session)?;
                GameNotOver::check(session)?;
                PositionFilled::check(pos, session)
            }
            Action::Submit => {
                GameNotOver::check(session)?;
                BoardFull::check(session)
            }
            Action::Reset => Ok(()),
        }
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), ActionError> {
        if !LocksPreserved::holds(before, after) {
            return Err(ActionError::InvariantViolation(
                "Postcondition failed: locked position changed".to_string(),
            ));
        }
        if !AttemptsMonotonic::holds(before, after) {
            return Err(ActionError::InvariantViolation(
                "Postcondition failed: attempts increased".to_string(),
            ));
        }
        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ActionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
