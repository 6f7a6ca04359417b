//! Win detection logic.

use crate::line::Line;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// Lines are scanned in [`Line::ALL`] order, so a board with several
/// completed lines reports the same one every time.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    for line in Line::ALL {
        let [a, b, c] = line.positions();
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            if let Cell::Occupied(mark) = cell {
                return Some((mark, line));
            }
        }
    }
    None
}
