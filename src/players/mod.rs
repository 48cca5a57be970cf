//! Player strategies.
//!
//! A strategy is asked for a move given the current state and the mark it
//! plays. It returns a position or abstains, which forfeits the game.
//!
//! - `RandomStrategy`: uniform over empty cells, seeded, never abstains
//! - `InteractiveStrategy`: reads positions from a line-based input

pub mod random;
pub mod interactive;

pub use random::RandomStrategy;
pub use interactive::InteractiveStrategy;

use crate::core::{GameState, Player};
use crate::error::Result;

/// Outcome of asking a strategy for a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveChoice {
    /// Play at this position. Strategies should only propose legal moves.
    Play(i32),
    /// Refuse to move; the opponent wins by forfeit.
    Abstain,
}

impl MoveChoice {
    /// The proposed position, if any.
    #[must_use]
    pub fn position(self) -> Option<i32> {
        match self {
            MoveChoice::Play(position) => Some(position),
            MoveChoice::Abstain => None,
        }
    }
}

/// A move-selection policy.
pub trait Strategy {
    /// Display name used in diagnostics and exports.
    fn name(&self) -> &str;

    /// Choose a move for `player` in `state`.
    ///
    /// # Errors
    ///
    /// Implementations fail only on conditions the caller cannot recover
    /// from, such as being asked to move with no empty cell left.
    fn select_move(&mut self, state: &GameState, player: Player) -> Result<MoveChoice>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_move(&mut self, state: &GameState, player: Player) -> Result<MoveChoice> {
        (**self).select_move(state, player)
    }
}
