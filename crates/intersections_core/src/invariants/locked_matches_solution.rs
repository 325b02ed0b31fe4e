//! Locked positions always hold their solution word.

use super::Invariant;
use crate::{CardState, GameSession, Position};

/// Invariant: every locked position holds its solution word, on a locked card.
///
/// Locking only ever follows a correctness check or a reveal.
pub struct LockedMatchesSolutionInvariant;

impl Invariant<GameSession> for LockedMatchesSolutionInvariant {
    fn holds(session: &GameSession) -> bool {
        Position::ALL
            .into_iter()
            .filter(|pos| session.board().is_locked(*pos))
            .all(|pos| {
                let Some(card) = session
                    .board()
                    .card_at(pos)
                    .and_then(|id| session.pool().get(id))
                else {
                    return false;
                };
                card.word() == session.puzzle().solution().get(pos)
                    && card.state() == CardState::Locked(pos)
            })
    }

    fn description() -> &'static str {
        "Locked positions hold their solution word"
    }
}
