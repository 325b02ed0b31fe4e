//! Puzzle records, validation and daily selection.
//!
//! Puzzle files hold raw [`PuzzleRecord`]s. A record only becomes a
//! playable [`Puzzle`] once it passes validation, which guarantees that
//! every word on the table is unique.

use super::{Corner, Position, Word};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Number of clues on every puzzle, one per corner.
pub const CLUE_COUNT: usize = 4;

/// Largest number of words (solution plus decoys) a puzzle may put on the table.
pub const MAX_WORDS: usize = 64;

/// The correct word for each of the four positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Word for the top position.
    pub top: Word,
    /// Word for the right position.
    pub right: Word,
    /// Word for the bottom position.
    pub bottom: Word,
    /// Word for the left position.
    pub left: Word,
}

impl Solution {
    /// Returns the correct word for a position.
    pub fn get(&self, pos: Position) -> &str {
        match pos {
            Position::Top => &self.top,
            Position::Right => &self.right,
            Position::Bottom => &self.bottom,
            Position::Left => &self.left,
        }
    }

    /// Iterates positions with their words in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &str)> {
        Position::ALL.into_iter().map(move |pos| (pos, self.get(pos)))
    }
}

/// A puzzle as stored in a puzzle file, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    /// Correct words per position.
    pub solution: Solution,
    /// Clues in corner order.
    pub clues: Vec<String>,
    /// Extra words that belong nowhere.
    pub decoys: Vec<Word>,
}

/// A collection of puzzle records (the `puzzles.json` document).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PuzzleCollection {
    /// All puzzles, rotated through by day of year.
    pub puzzles: Vec<PuzzleRecord>,
}

impl PuzzleCollection {
    /// Parses a collection from JSON.
    #[instrument(skip(json), fields(len = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let collection: Self = serde_json::from_str(json)?;
        debug!(count = collection.puzzles.len(), "Parsed puzzle collection");
        Ok(collection)
    }

    /// Number of puzzles in the collection.
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Returns true if the collection holds no puzzles.
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Picks and validates the puzzle for a 1-based day of year.
    ///
    /// Returns the collection index alongside the puzzle.
    #[instrument(skip(self), fields(count = self.puzzles.len()))]
    pub fn daily(&self, day_of_year: u32) -> Result<(usize, Puzzle), PuzzleError> {
        let index = daily_index(day_of_year, self.len()).ok_or(PuzzleError::EmptyCollection)?;
        let puzzle = Puzzle::try_from(self.puzzles[index].clone())?;
        debug!(index, "Selected daily puzzle");
        Ok((index, puzzle))
    }
}

/// Index of the puzzle for a 1-based day of year: `day mod count`.
pub fn daily_index(day_of_year: u32, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(day_of_year as usize % count)
}

/// Why a puzzle record cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleError {
    /// The collection contains no puzzles.
    #[display("Puzzle collection is empty")]
    EmptyCollection,

    /// A word is blank.
    #[display("Puzzle contains an empty word")]
    EmptyWord,

    /// A word appears more than once among solution and decoys.
    #[display("Word {:?} appears more than once", _0)]
    DuplicateWord(Word),

    /// The puzzle has no decoys.
    #[display("Puzzle needs at least one decoy")]
    NoDecoys,

    /// The puzzle does not have exactly one clue per corner.
    #[display("Expected {} clues, found {}", CLUE_COUNT, _0)]
    ClueCount(usize),

    /// Solution and decoys together exceed [`MAX_WORDS`].
    #[display("Puzzle has {} words, at most {} allowed", _0, MAX_WORDS)]
    TooManyWords(usize),
}

impl std::error::Error for PuzzleError {}

/// A validated, immutable puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PuzzleRecord", into = "PuzzleRecord")]
pub struct Puzzle {
    solution: Solution,
    clues: [String; CLUE_COUNT],
    decoys: Vec<Word>,
}

impl Puzzle {
    /// Built-in puzzle used whenever no puzzle file can be loaded.
    #[instrument]
    pub fn fallback() -> Self {
        Self {
            solution: Solution {
                top: "SUN".to_string(),
                right: "MOON".to_string(),
                bottom: "STAR".to_string(),
                left: "PLANET".to_string(),
            },
            clues: [
                "Sky Bodies".to_string(),
                "Daytime Light".to_string(),
                "Night Sky".to_string(),
                "Orbit".to_string(),
            ],
            decoys: vec!["CLOUD".to_string(), "COMET".to_string()],
        }
    }

    /// Returns the solution.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns the clues in corner order.
    pub fn clues(&self) -> &[String; CLUE_COUNT] {
        &self.clues
    }

    /// Returns the clue for a corner.
    pub fn clue(&self, corner: Corner) -> &str {
        &self.clues[corner.clue_index()]
    }

    /// Returns the decoy words.
    pub fn decoys(&self) -> &[Word] {
        &self.decoys
    }

    /// Every word on the table: solution words first, then decoys.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.solution
            .iter()
            .map(|(_, word)| word)
            .chain(self.decoys.iter().map(String::as_str))
    }

    /// The position a word is correct for, if any.
    pub fn position_of(&self, word: &str) -> Option<Position> {
        self.solution
            .iter()
            .find(|(_, w)| *w == word)
            .map(|(pos, _)| pos)
    }
}

impl TryFrom<PuzzleRecord> for Puzzle {
    type Error = PuzzleError;

    #[instrument(skip(record))]
    fn try_from(record: PuzzleRecord) -> Result<Self, Self::Error> {
        let clues: [String; CLUE_COUNT] = record
            .clues
            .try_into()
            .map_err(|clues: Vec<String>| PuzzleError::ClueCount(clues.len()))?;

        if record.decoys.is_empty() {
            return Err(PuzzleError::NoDecoys);
        }
        let total = Position::ALL.len() + record.decoys.len();
        if total > MAX_WORDS {
            return Err(PuzzleError::TooManyWords(total));
        }

        let mut seen = HashSet::new();
        let words = record
            .solution
            .iter()
            .map(|(_, word)| word)
            .chain(record.decoys.iter().map(String::as_str));
        for word in words {
            if word.trim().is_empty() {
                return Err(PuzzleError::EmptyWord);
            }
            if !seen.insert(word) {
                return Err(PuzzleError::DuplicateWord(word.to_string()));
            }
        }

        Ok(Self {
            solution: record.solution,
            clues,
            decoys: record.decoys,
        })
    }
}

impl From<Puzzle> for PuzzleRecord {
    fn from(puzzle: Puzzle) -> Self {
        Self {
            solution: puzzle.solution,
            clues: puzzle.clues.into(),
            decoys: puzzle.decoys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PuzzleRecord {
        Puzzle::fallback().into()
    }

    #[test]
    fn test_fallback_is_valid() {
        assert!(Puzzle::try_from(record()).is_ok());
    }

    #[test]
    fn test_duplicate_between_solution_and_decoys_rejected() {
        let mut rec = record();
        rec.decoys.push("MOON".to_string());
        assert_eq!(
            Puzzle::try_from(rec),
            Err(PuzzleError::DuplicateWord("MOON".to_string()))
        );
    }

    #[test]
    fn test_duplicate_inside_solution_rejected() {
        let mut rec = record();
        rec.solution.left = "SUN".to_string();
        assert!(matches!(
            Puzzle::try_from(rec),
            Err(PuzzleError::DuplicateWord(_))
        ));
    }

    #[test]
    fn test_wrong_clue_count_rejected() {
        let mut rec = record();
        rec.clues.pop();
        assert_eq!(Puzzle::try_from(rec), Err(PuzzleError::ClueCount(3)));
    }

    #[test]
    fn test_missing_decoys_rejected() {
        let mut rec = record();
        rec.decoys.clear();
        assert_eq!(Puzzle::try_from(rec), Err(PuzzleError::NoDecoys));
    }

    fn with_decoys(count: usize) -> PuzzleRecord {
        let mut rec = record();
        rec.decoys = (0..count).map(|i| format!("D{i}")).collect();
        rec
    }

    #[test]
    fn test_word_limit_is_inclusive() {
        let rec = with_decoys(MAX_WORDS - Position::ALL.len());
        assert!(Puzzle::try_from(rec).is_ok());
    }

    #[test]
    fn test_oversized_table_rejected() {
        let rec = with_decoys(300);
        assert_eq!(
            Puzzle::try_from(rec),
            Err(PuzzleError::TooManyWords(304))
        );
    }

    #[test]
    fn test_blank_word_rejected() {
        let mut rec = record();
        rec.decoys[0] = "   ".to_string();
        assert_eq!(Puzzle::try_from(rec), Err(PuzzleError::EmptyWord));
    }

    #[test]
    fn test_daily_index_wraps() {
        assert_eq!(daily_index(1, 3), Some(1));
        assert_eq!(daily_index(3, 3), Some(0));
        assert_eq!(daily_index(366, 5), Some(1));
        assert_eq!(daily_index(10, 0), None);
    }

    #[test]
    fn test_parse_collection_and_pick_daily() {
        let json = r#"{
            "puzzles": [
                {
                    "solution": {"top": "A", "right": "B", "bottom": "C", "left": "D"},
                    "clues": ["ab", "ad", "cb", "cd"],
                    "decoys": ["E"]
                },
                {
                    "solution": {"top": "SUN", "right": "MOON", "bottom": "STAR", "left": "PLANET"},
                    "clues": ["Sky Bodies", "Daytime Light", "Night Sky", "Orbit"],
                    "decoys": ["CLOUD", "COMET"]
                }
            ]
        }"#;
        let collection = PuzzleCollection::from_json(json).expect("valid json");
        assert_eq!(collection.len(), 2);

        let (index, puzzle) = collection.daily(43).expect("valid puzzle");
        assert_eq!(index, 1);
        assert_eq!(puzzle, Puzzle::fallback());
        assert_eq!(puzzle.clue(Corner::BottomLeft), "Orbit");
    }

    #[test]
    fn test_empty_collection_has_no_daily() {
        let collection = PuzzleCollection::default();
        assert_eq!(collection.daily(1), Err(PuzzleError::EmptyCollection));
    }

    #[test]
    fn test_position_of_decoy_is_none() {
        let puzzle = Puzzle::fallback();
        assert_eq!(puzzle.position_of("STAR"), Some(Position::Bottom));
        assert_eq!(puzzle.position_of("COMET"), None);
        assert_eq!(puzzle.words().count(), 6);
    }
}
