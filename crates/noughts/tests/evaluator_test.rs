//! Tests for the outcome evaluator.

use noughts::{Board, Cell, Line, Mark, Outcome, evaluate};

const E: Cell = Cell::Empty;
const X: Cell = Cell::Occupied(Mark::X);
const O: Cell = Cell::Occupied(Mark::O);

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_top_row_win_reports_mark_and_line() {
    let board = Board::from([X, X, X, O, O, E, E, E, E]);
    assert_eq!(evaluate(&board), Outcome::Win(Mark::X, Line::TopRow));
    assert_eq!(Line::TopRow.indices(), [0, 1, 2]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from([X, O, X, O, X, X, O, X, O]);
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_win_on_final_move_beats_draw() {
    // Full board where the last mark completed the main diagonal.
    let board = Board::from([X, O, O, O, X, X, X, O, X]);
    assert_eq!(evaluate(&board), Outcome::Win(Mark::X, Line::MainDiagonal));
}

#[test]
fn test_identical_input_yields_identical_outcome() {
    let board = Board::from([X, X, E, O, O, E, E, E, E]);
    assert_eq!(evaluate(&board), evaluate(&board));
    assert_eq!(evaluate(&board), Outcome::InProgress);
}

#[test]
fn test_multiple_complete_lines_report_first_in_scan_order() {
    // Every line complete: the top row comes first in the fixed order.
    let board = Board::from([X; 9]);
    assert_eq!(evaluate(&board), Outcome::Win(Mark::X, Line::TopRow));

    // Left column and bottom row both complete for O; rows are scanned
    // before columns.
    let board = Board::from([O, X, X, O, E, X, O, O, O]);
    assert_eq!(evaluate(&board), Outcome::Win(Mark::O, Line::BottomRow));
}

#[test]
fn test_outcome_accessors() {
    let won = evaluate(&Board::from([X, X, X, O, O, E, E, E, E]));
    assert_eq!(won.winner(), Some(Mark::X));
    assert_eq!(won.winning_line(), Some(Line::TopRow));
    assert!(won.is_terminal());
    assert!(!won.is_draw());

    assert!(!Outcome::InProgress.is_terminal());
    assert!(Outcome::Draw.is_draw());
    assert_eq!(Outcome::Draw.winner(), None);
}
