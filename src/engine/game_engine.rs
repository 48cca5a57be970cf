//! The game engine: the only component that knows about legality.

use tracing::debug;

use crate::core::{GameAction, GameId, GameState, HistoryState, Player};
use crate::error::{Error, Result};
use crate::rules::{validate_move, MoveRejection};
use crate::store::Store;

/// Validates moves and drives a [`Store`].
///
/// `try_make_move` is the only path by which a `MakeMove` should reach the
/// store. The engine exclusively owns its store; use one engine per game
/// instance.
///
/// ## Example
///
/// ```
/// use tictactoe_engine::{GameEngine, MoveRejection, Player};
///
/// let mut engine = GameEngine::new();
/// engine.start_game(Player::X, None);
///
/// assert!(engine.try_make_move(Player::X, 4).is_ok());
/// assert_eq!(
///     engine.try_make_move(Player::O, 4),
///     Err(MoveRejection::PositionOccupied)
/// );
/// assert_eq!(engine.current_player(), Player::O);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    store: Store,
}

impl GameEngine {
    /// Create an engine with its own store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine around an existing store.
    #[must_use]
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    // === Commands ===

    /// Start a new game. Always succeeds, from any state.
    pub fn start_game(&mut self, starting_player: Player, game_id: Option<GameId>) {
        self.store.dispatch(GameAction::StartGame {
            starting_player,
            game_id,
        });
        debug!(
            game_id = %self.state().game_id(),
            starting_player = %starting_player,
            "game started"
        );
    }

    /// Check a prospective move without applying it.
    pub fn is_valid_move(&self, player: Player, position: i32) -> std::result::Result<(), MoveRejection> {
        validate_move(self.state(), player, position).map(|_| ())
    }

    /// Apply a move if it is legal.
    ///
    /// On rejection nothing is dispatched and the reason is returned; the
    /// caller may retry with another position.
    pub fn try_make_move(&mut self, player: Player, position: i32) -> std::result::Result<(), MoveRejection> {
        let index = validate_move(self.state(), player, position).map_err(|reason| {
            debug!(%player, position, %reason, "move rejected");
            reason
        })?;

        self.store.dispatch(GameAction::make_move(player, index));
        Ok(())
    }

    /// Apply a move the caller has already proven legal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the move is rejected.
    pub fn make_move(&mut self, player: Player, position: i32) -> Result<()> {
        self.try_make_move(player, position)
            .map_err(|reason| Error::IllegalMove {
                player_name: format!("Player {player}"),
                player,
                position,
                reason,
            })
    }

    /// Restart the current game with `X` to move, keeping the game id.
    pub fn reset_game(&mut self) {
        self.store.dispatch(GameAction::ResetGame);
        debug!(game_id = %self.state().game_id(), "game reset");
    }

    // === Queries ===

    /// Current game snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.store.state().game
    }

    /// Every action dispatched so far.
    #[must_use]
    pub fn history(&self) -> &HistoryState {
        &self.store.state().history
    }

    /// Check if the current game is over.
    #[must_use]
    pub fn is_game_finished(&self) -> bool {
        self.state().is_finished()
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state().current_player()
    }

    /// Winner of the current game, `None` while playing or on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.state().winner()
    }
}
