//! Attempts and phase agree.

use super::Invariant;
use crate::{GameSession, MAX_ATTEMPTS, Phase};

/// Invariant: attempts never exceed the limit, and the phase matches them.
///
/// - `Playing` always has an attempt left
/// - `LostRevealed` has none
/// - both terminal phases have every position locked
pub struct AttemptsBoundedInvariant;

impl Invariant<GameSession> for AttemptsBoundedInvariant {
    fn holds(session: &GameSession) -> bool {
        let attempts = session.attempts_remaining();
        let all_locked = session.board().locked_positions().len() == 4;
        if attempts > MAX_ATTEMPTS {
            return false;
        }
        match session.phase() {
            Phase::Playing => attempts > 0,
            Phase::WonPerfect => all_locked,
            Phase::LostRevealed => attempts == 0 && all_locked,
        }
    }

    fn description() -> &'static str {
        "Attempts stay within bounds and agree with the phase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{new_session, place_words};

    #[test]
    fn test_fresh_session_holds() {
        let session = new_session();
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert!(AttemptsBoundedInvariant::holds(&session));
    }

    #[test]
    fn test_zero_attempts_while_playing_violates() {
        let mut session = new_session();
        place_words(&mut session, ["SUN", "MOON", "STAR", "COMET"]);
        session.attempts_remaining = 0;
        assert!(!AttemptsBoundedInvariant::holds(&session));
    }
}
