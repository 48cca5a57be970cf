//! Actions: immutable intents dispatched to the store.
//!
//! Three variants exist:
//! - `StartGame` replaces the current game with a fresh one
//! - `MakeMove` places a mark (assumed legal, see [`crate::engine::GameEngine`])
//! - `ResetGame` restarts with `X` to move, keeping the game id
//!
//! Reducers never interpret an action they don't handle; they return the
//! input state unchanged.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::state::GameId;

/// An intent to change the game.
///
/// ## Example
///
/// ```
/// use tictactoe_engine::core::{GameAction, Player};
///
/// let start = GameAction::start(Player::X);
/// let play = GameAction::make_move(Player::X, 4);
/// assert_ne!(start, play);
/// assert_eq!(GameAction::ResetGame.kind().name(), "ResetGame");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[non_exhaustive]
pub enum GameAction {
    /// Start a new game. A fresh id is generated when `game_id` is `None`.
    StartGame {
        starting_player: Player,
        game_id: Option<GameId>,
    },

    /// Place `player`'s mark at `position` (0-8).
    MakeMove { player: Player, position: usize },

    /// Restart the current game with `X` to move.
    ResetGame,
}

impl GameAction {
    /// Start a new game with a generated id.
    #[must_use]
    pub fn start(starting_player: Player) -> Self {
        GameAction::StartGame {
            starting_player,
            game_id: None,
        }
    }

    /// Start a new game with a caller-chosen id.
    #[must_use]
    pub fn start_with_id(starting_player: Player, game_id: GameId) -> Self {
        GameAction::StartGame {
            starting_player,
            game_id: Some(game_id),
        }
    }

    /// Place a mark.
    #[must_use]
    pub fn make_move(player: Player, position: usize) -> Self {
        GameAction::MakeMove { player, position }
    }

    /// Get the variant tag of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            GameAction::StartGame { .. } => ActionKind::StartGame,
            GameAction::MakeMove { .. } => ActionKind::MakeMove,
            GameAction::ResetGame => ActionKind::ResetGame,
        }
    }
}

/// Variant tag of a [`GameAction`], used for history queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    StartGame,
    MakeMove,
    ResetGame,
}

impl ActionKind {
    /// Human-readable variant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::StartGame => "StartGame",
            ActionKind::MakeMove => "MakeMove",
            ActionKind::ResetGame => "ResetGame",
        }
    }
}
