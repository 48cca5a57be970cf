//! Move legality.
//!
//! Checks run in a fixed order and the first failing check is reported:
//! 1. the game is in progress
//! 2. it is the player's turn
//! 3. the position is on the board
//! 4. the position is empty
//!
//! The order decides which reason is shown when several rules are violated
//! at once (an off-board move on a finished game reports "not in progress").

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameState, Player, BOARD_SIZE};

/// Why a move was rejected.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("Game is not in progress")]
    GameNotInProgress,

    #[error("It's not {player}'s turn")]
    NotPlayersTurn { player: Player },

    #[error("Position must be between 0 and 8")]
    PositionOutOfRange { position: i32 },

    #[error("Position is already occupied")]
    PositionOccupied,
}

/// Validate a prospective move against `state`.
///
/// Returns the board index on success.
pub fn validate_move(state: &GameState, player: Player, position: i32) -> Result<usize, MoveRejection> {
    if state.is_finished() {
        return Err(MoveRejection::GameNotInProgress);
    }

    if player != state.current_player() {
        return Err(MoveRejection::NotPlayersTurn { player });
    }

    let index = usize::try_from(position)
        .ok()
        .filter(|&i| i < BOARD_SIZE)
        .ok_or(MoveRejection::PositionOutOfRange { position })?;

    if !state.is_position_empty(index) {
        return Err(MoveRejection::PositionOccupied);
    }

    Ok(index)
}
