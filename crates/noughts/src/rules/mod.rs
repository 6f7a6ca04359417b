//! Outcome evaluation: win and draw detection.

pub mod draw;
pub mod win;

use crate::line::Line;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game continues; further moves are legal.
    InProgress,
    /// The mark completed the given line.
    Win(Mark, Line),
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark, _) => Some(*mark),
            _ => None,
        }
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win(_, line) => Some(*line),
            _ => None,
        }
    }

    /// Returns true once no further moves are legal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark, line) => write!(f, "Player {:?} wins on the {}", mark, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board into its current outcome.
///
/// The first completed line in [`Line::ALL`] order wins; a full board
/// with no completed line is a draw; anything else is in progress. The
/// function is total and deterministic for any well-formed 9-cell board,
/// including boards unreachable under alternating play.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = win::winning_line(board) {
        return Outcome::Win(mark, line);
    }
    if draw::is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
