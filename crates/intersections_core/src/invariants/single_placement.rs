//! Board and card states agree.

use super::Invariant;
use crate::{CardState, GameSession};

/// Invariant: each card sits in at most one position and its state says so.
///
/// A card is `Placed`/`Locked` exactly where the board holds it, only the
/// selected card is `Selected`, and every other card is `InPool`.
pub struct SinglePlacementInvariant;

impl Invariant<GameSession> for SinglePlacementInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let pool = session.pool();

        pool.cards().iter().all(|card| {
            let on_board = board.position_of(card.id());
            let occurrences = board
                .placements()
                .filter(|(_, id)| *id == card.id())
                .count();
            if occurrences > 1 {
                return false;
            }
            match card.state() {
                CardState::InPool => on_board.is_none() && pool.selected() != Some(card.id()),
                CardState::Selected => on_board.is_none() && pool.selected() == Some(card.id()),
                CardState::Placed(pos) => on_board == Some(pos) && !board.is_locked(pos),
                CardState::Locked(pos) => on_board == Some(pos) && board.is_locked(pos),
            }
        })
    }

    fn description() -> &'static str {
        "Each card occupies at most one position and its state matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card, new_session, place_words};
    use crate::{CardId, Position};

    #[test]
    fn test_selection_holds() {
        let mut session = new_session();
        session.select_card(card(&session, "SUN"));
        assert!(SinglePlacementInvariant::holds(&session));
    }

    #[test]
    fn test_placements_hold() {
        let mut session = new_session();
        place_words(&mut session, ["SUN", "MOON", "COMET", "PLANET"]);
        assert!(SinglePlacementInvariant::holds(&session));
    }

    #[test]
    fn test_card_in_two_positions_violates() {
        let mut session = new_session();
        place_words(&mut session, ["SUN", "MOON", "COMET", "PLANET"]);
        let sun: CardId = card(&session, "SUN");
        session.board.put(Position::Right, sun);
        assert!(!SinglePlacementInvariant::holds(&session));
    }
}
