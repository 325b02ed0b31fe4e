//! Board positions and the clue corners between them.

use serde::{Deserialize, Serialize};

/// One of the four fixed board locations.
///
/// The board is a diamond: each position borders two corners, and each
/// corner carries the clue shared by its two positions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Position {
    /// Top of the board.
    Top,
    /// Right side of the board.
    Right,
    /// Bottom of the board.
    Bottom,
    /// Left side of the board.
    Left,
}

impl Position {
    /// All four positions in evaluation order.
    pub const ALL: [Position; 4] = [
        Position::Top,
        Position::Right,
        Position::Bottom,
        Position::Left,
    ];

    /// Converts position to slot index (0-3).
    pub fn to_index(self) -> usize {
        match self {
            Position::Top => 0,
            Position::Right => 1,
            Position::Bottom => 2,
            Position::Left => 3,
        }
    }

    /// Creates position from slot index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::Top => "Top",
            Position::Right => "Right",
            Position::Bottom => "Bottom",
            Position::Left => "Left",
        }
    }
}

/// A corner between two adjacent positions, holding one clue.
///
/// Corner order matches the clue order in puzzle files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Corner {
    /// Between top and right (clue 0).
    TopRight,
    /// Between top and left (clue 1).
    TopLeft,
    /// Between bottom and right (clue 2).
    BottomRight,
    /// Between bottom and left (clue 3).
    BottomLeft,
}

impl Corner {
    /// All corners in clue order.
    pub const ALL: [Corner; 4] = [
        Corner::TopRight,
        Corner::TopLeft,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Index of this corner's clue.
    pub fn clue_index(self) -> usize {
        match self {
            Corner::TopRight => 0,
            Corner::TopLeft => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    /// The two positions whose words share this corner's clue.
    pub fn positions(self) -> (Position, Position) {
        match self {
            Corner::TopRight => (Position::Top, Position::Right),
            Corner::TopLeft => (Position::Top, Position::Left),
            Corner::BottomRight => (Position::Bottom, Position::Right),
            Corner::BottomLeft => (Position::Bottom, Position::Left),
        }
    }
}
