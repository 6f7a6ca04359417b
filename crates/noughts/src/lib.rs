//! Tic-tac-toe game engine: board model, outcome evaluation, and tiered
//! move selection.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] with the value-producing [`Board::apply`]
//! - **Outcome evaluator**: [`evaluate`] — win/draw detection over the
//!   eight fixed [`Line`] patterns
//! - **Move selector**: [`select_move`] — exhaustive minimax search with
//!   [`Difficulty`] tiers and an injected random source
//! - **Session**: [`GameSession`] — caller-side turn and outcome
//!   bookkeeping over the stateless core
//!
//! The engine is synchronous and stateless across calls: every entry
//! point is a pure function of its explicit inputs. Randomness for the
//! Easy and Medium tiers comes from a caller-supplied [`rand::Rng`], so
//! seeded callers get reproducible games.
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, GameSession, OpponentMode, Outcome};
//!
//! let mut rng = rand::rng();
//! let mut game = GameSession::new(OpponentMode::Computer, Difficulty::Hard);
//!
//! // Human X takes the center; the computer answers as O.
//! game.play(4)?;
//! let reply = game.play_computer(&mut rng)?;
//! assert_ne!(reply.to_index(), 4);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! # Ok::<(), noughts::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod invariants;
mod line;
mod position;
mod rules;
mod selector;
mod session;
mod types;

// Crate-level exports - Board model
pub use types::{Board, Cell, IllegalMove, Mark};

// Crate-level exports - Positions and lines
pub use line::Line;
pub use position::Position;

// Crate-level exports - Actions
pub use action::Move;

// Crate-level exports - Outcome evaluation
pub use rules::{Outcome, evaluate};

// Crate-level exports - Move selection
pub use selector::{Difficulty, NoLegalMove, select_move};

// Crate-level exports - Session management
pub use session::{GameSession, OpponentMode, SessionError};

// Crate-level exports - Runtime invariants
pub use invariants::{BalancedMarks, Invariant, MonotonicBoard};
