//! Caller-side game session.
//!
//! The engine itself is stateless; a [`GameSession`] is the piece of
//! state a UI layer owns between calls: the current board, whose turn it
//! is, the running outcome, and the opponent settings. Menu and screen
//! flow stay with the caller.

use crate::action::Move;
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::selector::{self, Difficulty, NoLegalMove};
use crate::types::{Board, IllegalMove, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays the second mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentMode {
    /// Both marks are placed by callers.
    Human,
    /// The second mark is chosen by the move selector.
    Computer,
}

/// Error from a session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The game already reached a terminal outcome.
    #[display("the game is already over")]
    Finished,
    /// The move request was rejected by the board.
    #[display("{}", _0)]
    Illegal(IllegalMove),
    /// The selector was invoked with no legal move available.
    #[display("{}", _0)]
    NoMove(NoLegalMove),
}

impl std::error::Error for SessionError {}

impl From<IllegalMove> for SessionError {
    fn from(err: IllegalMove) -> Self {
        SessionError::Illegal(err)
    }
}

impl From<NoLegalMove> for SessionError {
    fn from(err: NoLegalMove) -> Self {
        SessionError::NoMove(err)
    }
}

/// A single game owned by the caller.
///
/// The session hands board snapshots to the evaluator and selector and
/// records their results; it never reaches into the core's internals.
/// X always moves first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Current board.
    pub(crate) board: Board,
    /// Mark to move next.
    pub(crate) to_move: Mark,
    /// Outcome after the latest move.
    pub(crate) outcome: Outcome,
    /// Who plays the second mark.
    pub(crate) mode: OpponentMode,
    /// Strength of the automated player.
    pub(crate) difficulty: Difficulty,
    /// Moves played so far.
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Starts a fresh session with an empty board and X to move.
    #[instrument]
    pub fn new(mode: OpponentMode, difficulty: Difficulty) -> Self {
        info!(?mode, ?difficulty, "starting game session");
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            mode,
            difficulty,
            history: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    ///
    /// Once the game is over this stays on the mark that ended it.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the outcome after the latest move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the opponent mode.
    pub fn mode(&self) -> OpponentMode {
        self.mode
    }

    /// Returns the difficulty of the automated player.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies the current player's mark at `index`.
    ///
    /// Returns the outcome after the move; the turn passes to the other
    /// mark only while the game remains in progress.
    ///
    /// # Errors
    ///
    /// [`SessionError::Finished`] after a terminal outcome, and
    /// [`SessionError::Illegal`] for an out-of-bounds index or an
    /// occupied cell (the board is left untouched in both cases).
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::Finished);
        }
        let position = Position::from_index(index).ok_or(IllegalMove::OutOfBounds(index))?;
        self.board = self.board.place(position, self.to_move)?;
        self.history.push(Move::new(self.to_move, position));
        self.outcome = rules::evaluate(&self.board);
        if !self.outcome.is_terminal() {
            self.to_move = self.to_move.opponent();
        }
        assert_invariants(self);
        debug!(outcome = %self.outcome, "move applied");
        Ok(self.outcome)
    }

    /// Selects and applies a move for the automated player.
    ///
    /// Uses the session difficulty and the supplied random source;
    /// returns the chosen position.
    ///
    /// # Errors
    ///
    /// [`SessionError::Finished`] after a terminal outcome; selector
    /// failures surface as [`SessionError::NoMove`].
    #[instrument(skip(self, rng))]
    pub fn play_computer(&mut self, rng: &mut impl Rng) -> Result<Position, SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::Finished);
        }
        let position = selector::select_move(&self.board, self.to_move, self.difficulty, rng)?;
        self.play(position.to_index())?;
        Ok(position)
    }

    /// Resets to an empty board with X to move.
    ///
    /// Mode and difficulty are kept. This is the only operation that
    /// reverts occupied cells.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting game session");
        self.board = Board::new();
        self.to_move = Mark::X;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }
}
