//! Game rules: win/draw detection and move legality.
//!
//! - `lines`: the 8 winning triples and status evaluation
//! - `validation`: the ordered legality checks used by the engine
//!
//! Reducers use `lines` to recompute status but never call `validation`;
//! legality is enforced only by [`crate::engine::GameEngine`].

pub mod lines;
pub mod validation;

pub use lines::{evaluate_status, lines_through, status_after_move, winning_line, Line, WINNING_LINES};
pub use validation::{validate_move, MoveRejection};
