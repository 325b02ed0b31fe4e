//! Game phases and outcomes.

use serde::{Deserialize, Serialize};

/// Phase of a puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting moves.
    #[default]
    Playing,
    /// Solved with every word correct.
    WonPerfect,
    /// Attempts exhausted; the solution has been revealed.
    LostRevealed,
}

impl Phase {
    /// Returns true for both terminal phases.
    pub fn is_complete(self) -> bool {
        !matches!(self, Phase::Playing)
    }

    /// The outcome, once the game is over.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::Playing => None,
            Phase::WonPerfect => Some(Outcome::Won),
            Phase::LostRevealed => Some(Outcome::Lost),
        }
    }
}

/// Outcome of a finished puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every word placed correctly.
    Won,
    /// Ran out of attempts.
    Lost,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "Solved"),
            Outcome::Lost => write!(f, "Revealed"),
        }
    }
}
