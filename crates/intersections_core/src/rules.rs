//! Answer checking.
//!
//! Pure functions over the board and pool, kept apart from the session
//! so they compose into contracts.

use super::{Board, CardPool, Position, Puzzle};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Attempts granted per puzzle.
pub const MAX_ATTEMPTS: u8 = 2;

/// Filled positions split by correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Positions holding their solution word.
    pub correct: Vec<Position>,
    /// Positions holding any other word.
    pub incorrect: Vec<Position>,
}

impl Evaluation {
    /// Returns true if nothing is wrong.
    pub fn is_perfect(&self) -> bool {
        self.incorrect.is_empty()
    }
}

/// Returns true if the card at `pos` carries the solution word for it.
pub fn is_correct(puzzle: &Puzzle, board: &Board, pool: &CardPool, pos: Position) -> bool {
    board
        .card_at(pos)
        .and_then(|id| pool.get(id))
        .is_some_and(|card| card.word() == puzzle.solution().get(pos))
}

/// Partitions the filled positions into correct and incorrect.
#[instrument(skip_all)]
pub fn evaluate(puzzle: &Puzzle, board: &Board, pool: &CardPool) -> Evaluation {
    let mut evaluation = Evaluation::default();
    for (pos, _) in board.placements() {
        if is_correct(puzzle, board, pool, pos) {
            evaluation.correct.push(pos);
        } else {
            evaluation.incorrect.push(pos);
        }
    }
    evaluation
}

/// Message shown after a submit that leaves attempts to spare.
pub fn partial_message(evaluation: &Evaluation) -> String {
    format!(
        "{} correct! {} to fix. Try again!",
        evaluation.correct.len(),
        evaluation.incorrect.len()
    )
}

/// Message shown on a perfect board.
pub const SUCCESS_MESSAGE: &str = "Perfect! You solved the puzzle!";

/// Message shown when attempts run out.
pub const FAILURE_MESSAGE: &str = "Game Over! Better luck tomorrow!";

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fill(pool: &CardPool, words: [&str; 4]) -> Board {
        let mut board = Board::new();
        for (pos, word) in Position::ALL.into_iter().zip(words) {
            let id = pool.find_word(word).map(|c| c.id()).unwrap();
            board.put(pos, id);
        }
        board
    }

    #[test]
    fn test_all_correct_is_perfect() {
        let puzzle = Puzzle::fallback();
        let pool = CardPool::generate(&puzzle, &mut StdRng::seed_from_u64(1));
        let board = fill(&pool, ["SUN", "MOON", "STAR", "PLANET"]);
        let eval = evaluate(&puzzle, &board, &pool);
        assert!(eval.is_perfect());
        assert_eq!(eval.correct, Position::ALL.to_vec());
    }

    #[test]
    fn test_swapped_words_are_incorrect() {
        let puzzle = Puzzle::fallback();
        let pool = CardPool::generate(&puzzle, &mut StdRng::seed_from_u64(1));
        let board = fill(&pool, ["MOON", "SUN", "STAR", "COMET"]);
        let eval = evaluate(&puzzle, &board, &pool);
        assert_eq!(eval.correct, vec![Position::Bottom]);
        assert_eq!(
            eval.incorrect,
            vec![Position::Top, Position::Right, Position::Left]
        );
        assert_eq!(partial_message(&eval), "1 correct! 3 to fix. Try again!");
    }

    #[test]
    fn test_empty_position_is_not_correct() {
        let puzzle = Puzzle::fallback();
        let pool = CardPool::generate(&puzzle, &mut StdRng::seed_from_u64(1));
        let board = Board::new();
        assert!(!is_correct(&puzzle, &board, &pool, Position::Top));
        assert_eq!(evaluate(&puzzle, &board, &pool), Evaluation::default());
    }
}
