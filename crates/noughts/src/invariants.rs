//! Runtime invariants checked in debug builds.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and serve as documentation of the
//! guarantees the session layer maintains.

use crate::session::GameSession;
use crate::types::{Board, Cell, Mark};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Cells are written at most once.
///
/// Replaying the move history from an empty board must land every mark
/// on a previously empty cell and reproduce the current board exactly.
pub struct MonotonicBoard;

impl Invariant<GameSession> for MonotonicBoard {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();
        for mov in session.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.set(mov.position, Cell::Occupied(mov.mark));
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "board cells are written at most once and match the move history"
    }
}

/// Marks stay balanced under alternating play.
///
/// The counts of X and O cells on the board differ by at most one.
pub struct BalancedMarks;

impl Invariant<GameSession> for BalancedMarks {
    fn holds(session: &GameSession) -> bool {
        let count = |mark: Mark| {
            session
                .board()
                .cells()
                .iter()
                .filter(|c| **c == Cell::Occupied(mark))
                .count()
        };
        count(Mark::X).abs_diff(count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}

/// Debug-asserts every session invariant.
pub(crate) fn assert_invariants(session: &GameSession) {
    debug_assert!(
        check::<MonotonicBoard>(session),
        "{}",
        MonotonicBoard::description()
    );
    debug_assert!(
        check::<BalancedMarks>(session),
        "{}",
        BalancedMarks::description()
    );
}

fn check<I: Invariant<GameSession>>(session: &GameSession) -> bool {
    let ok = I::holds(session);
    if !ok {
        warn!(invariant = I::description(), "invariant violated");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::selector::Difficulty;
    use crate::session::OpponentMode;

    fn session_after(moves: &[usize]) -> GameSession {
        let mut session = GameSession::new(OpponentMode::Human, Difficulty::Hard);
        for &index in moves {
            session.play(index).expect("legal move");
        }
        session
    }

    #[test]
    fn test_fresh_session_holds() {
        let session = session_after(&[]);
        assert!(MonotonicBoard::holds(&session));
        assert!(BalancedMarks::holds(&session));
    }

    #[test]
    fn test_holds_after_moves() {
        let session = session_after(&[4, 0, 8]);
        assert!(MonotonicBoard::holds(&session));
        assert!(BalancedMarks::holds(&session));
    }

    #[test]
    fn test_monotonic_detects_overwritten_cell() {
        let mut session = session_after(&[4, 0]);
        // Corrupt the board behind the session's back.
        session
            .board
            .set(Position::Center, Cell::Occupied(Mark::O));
        assert!(!MonotonicBoard::holds(&session));
    }

    #[test]
    fn test_balanced_detects_double_move() {
        let mut session = session_after(&[4]);
        session
            .board
            .set(Position::TopLeft, Cell::Occupied(Mark::X));
        session
            .board
            .set(Position::TopRight, Cell::Occupied(Mark::X));
        assert!(!BalancedMarks::holds(&session));
    }
}
