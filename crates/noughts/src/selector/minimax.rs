//! Exhaustive game-tree search.
//!
//! Two layers: [`score`] values a board recursively, and [`best_move`]
//! tracks the best top-level placement.

use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::types::{Board, Cell, Mark};

/// Returns the strongest placement for `mark`.
///
/// Every empty position is tried in ascending index order and scored
/// with [`score`]; ties keep the first-encountered (lowest) index.
/// The search is exhaustive; the 9-cell board bounds it without pruning.
///
/// Callers must pass a board with at least one empty cell.
pub(crate) fn best_move(board: &Board, mark: Mark) -> Position {
    let mut best: Option<(Position, i32)> = None;
    for pos in Position::valid_moves(board) {
        let mut child = board.clone();
        child.set(pos, Cell::Occupied(mark));
        let value = score(&child, mark, 1, false);
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((pos, value));
        }
    }
    let (pos, _) = best.expect("board has an empty cell");
    pos
}

/// Scores a board from the point of view of the maximizing `mark`.
///
/// Terminal boards score `10 - depth` for a win by `mark`, `depth - 10`
/// for a win by the opponent, and `0` for a draw. The depth adjustment
/// prefers faster wins and slower losses among equally decided lines.
/// Non-terminal boards recurse over every empty position, placing the
/// mark that belongs to the current ply.
fn score(board: &Board, mark: Mark, depth: i32, maximizing: bool) -> i32 {
    match rules::evaluate(board) {
        Outcome::Win(winner, _) => {
            if winner == mark {
                10 - depth
            } else {
                depth - 10
            }
        }
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let to_place = if maximizing { mark } else { mark.opponent() };
            let mut acc = if maximizing { i32::MIN } else { i32::MAX };
            for pos in Position::valid_moves(board) {
                let mut child = board.clone();
                child.set(pos, Cell::Occupied(to_place));
                let value = score(&child, mark, depth + 1, !maximizing);
                acc = if maximizing {
                    acc.max(value)
                } else {
                    acc.min(value)
                };
            }
            acc
        }
    }
}
