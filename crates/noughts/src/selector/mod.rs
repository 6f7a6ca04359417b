//! Move selection for the automated player.

mod minimax;

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How much search the automated player performs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random among the empty cells.
    Easy,
    /// The search result three times out of five, random otherwise.
    Medium,
    /// Always the search result (optimal play).
    Hard,
}

/// Share of Medium-tier moves that use the search result.
const MEDIUM_SEARCH_RATE: f64 = 0.6;

/// Error returned when the selector is invoked with no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("no legal move: the board is full or the game is over")]
pub struct NoLegalMove;

impl std::error::Error for NoLegalMove {}

/// Selects the next move for `mark` at the given difficulty.
///
/// Easy draws once from `rng` to pick uniformly among the empty cells.
/// Medium draws once to choose a branch: below [`MEDIUM_SEARCH_RATE`] it
/// returns the search result, otherwise it falls back to the Easy choice
/// with a second, independent draw. Hard consumes no randomness at all,
/// so identical boards always produce identical moves.
///
/// # Errors
///
/// Returns [`NoLegalMove`] if the board is already decided or full;
/// that is a caller-contract violation, not a game state.
#[instrument(skip(rng))]
pub fn select_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Result<Position, NoLegalMove> {
    if rules::evaluate(board).is_terminal() {
        return Err(NoLegalMove);
    }
    // An in-progress board always has at least one empty cell.
    let moves = Position::valid_moves(board);

    let position = match difficulty {
        Difficulty::Easy => random_move(&moves, rng),
        Difficulty::Medium => {
            if rng.random::<f64>() < MEDIUM_SEARCH_RATE {
                minimax::best_move(board, mark)
            } else {
                random_move(&moves, rng)
            }
        }
        Difficulty::Hard => minimax::best_move(board, mark),
    };
    debug!(?position, ?mark, ?difficulty, "selected move");
    Ok(position)
}

/// One uniform draw over the legal moves.
fn random_move(moves: &[Position], rng: &mut impl Rng) -> Position {
    moves[rng.random_range(0..moves.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);

    #[test]
    fn test_rejects_won_board() {
        let board = Board::from([X, X, X, O, O, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(1);
        for difficulty in Difficulty::iter() {
            assert_eq!(
                select_move(&board, Mark::O, difficulty, &mut rng),
                Err(NoLegalMove)
            );
        }
    }

    #[test]
    fn test_rejects_full_board() {
        let board = Board::from([X, O, X, O, X, X, O, X, O]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            select_move(&board, Mark::X, Difficulty::Hard, &mut rng),
            Err(NoLegalMove)
        );
    }

    #[test]
    fn test_sole_empty_cell_every_difficulty() {
        // One empty cell, no winner: every tier must return it.
        let board = Board::from([X, O, X, X, O, O, O, X, E]);
        for difficulty in Difficulty::iter() {
            let mut rng = StdRng::seed_from_u64(7);
            assert_eq!(
                select_move(&board, Mark::X, difficulty, &mut rng),
                Ok(Position::BottomRight)
            );
        }
    }

    #[test]
    fn test_easy_picks_only_empty_cells() {
        let board = Board::from([X, E, E, E, O, E, E, E, X]);
        let empties = Position::valid_moves(&board);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let pos = select_move(&board, Mark::O, Difficulty::Easy, &mut rng).unwrap();
            assert!(empties.contains(&pos));
        }
    }
}
