//! The eight fixed three-in-a-row patterns.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A winning line: three positions that share a row, column, or diagonal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Line {
    /// Top row (indices 0, 1, 2)
    TopRow,
    /// Middle row (indices 3, 4, 5)
    MiddleRow,
    /// Bottom row (indices 6, 7, 8)
    BottomRow,
    /// Left column (indices 0, 3, 6)
    LeftColumn,
    /// Center column (indices 1, 4, 7)
    CenterColumn,
    /// Right column (indices 2, 5, 8)
    RightColumn,
    /// Main diagonal (indices 0, 4, 8)
    MainDiagonal,
    /// Anti-diagonal (indices 2, 4, 6)
    AntiDiagonal,
}

impl Line {
    /// All eight lines in evaluation order: rows, columns, diagonals.
    ///
    /// The evaluator scans in this order, so a board with several
    /// completed lines always reports the same one.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions this line covers.
    pub fn positions(self) -> [Position; 3] {
        match self {
            Line::TopRow => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Line::MiddleRow => [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            Line::BottomRow => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Line::LeftColumn => [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            Line::CenterColumn => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            Line::RightColumn => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            Line::MainDiagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// The three board indices this line covers.
    pub fn indices(self) -> [usize; 3] {
        let [a, b, c] = self.positions();
        [a.to_index(), b.to_index(), c.to_index()]
    }

    /// Get label for this line (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Line::TopRow => "top row",
            Line::MiddleRow => "middle row",
            Line::BottomRow => "bottom row",
            Line::LeftColumn => "left column",
            Line::CenterColumn => "center column",
            Line::RightColumn => "right column",
            Line::MainDiagonal => "main diagonal",
            Line::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_indices() {
        assert_eq!(Line::TopRow.indices(), [0, 1, 2]);
        assert_eq!(Line::LeftColumn.indices(), [0, 3, 6]);
        assert_eq!(Line::MainDiagonal.indices(), [0, 4, 8]);
        assert_eq!(Line::AntiDiagonal.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_rows_scanned_before_columns_and_diagonals() {
        assert_eq!(Line::ALL[0], Line::TopRow);
        assert_eq!(Line::ALL[3], Line::LeftColumn);
        assert_eq!(Line::ALL[7], Line::AntiDiagonal);
    }
}
