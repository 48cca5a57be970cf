//! Drives a single game between two strategies.

use tracing::{error, instrument, warn};

use crate::core::{GameState, Player};
use crate::engine::GameEngine;
use crate::error::{Error, Result};
use crate::players::{MoveChoice, Strategy};

use super::metrics::GameResult;

/// Plays one game at a time on an owned [`GameEngine`].
///
/// The engine is reset at the start of every game, so a loop can be reused
/// for any number of games.
#[derive(Clone, Debug, Default)]
pub struct GameLoop {
    engine: GameEngine,
}

impl GameLoop {
    /// Create a loop with a fresh engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loop around an existing engine.
    #[must_use]
    pub fn with_engine(engine: GameEngine) -> Self {
        Self { engine }
    }

    /// Play one game. `x` plays `X`, `o` plays `O`.
    ///
    /// An abstaining strategy forfeits: its opponent is recorded as winner
    /// and the game stops immediately.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalMove`] if a strategy proposes a move the engine
    /// rejects, or any error returned by a strategy. Both end the game;
    /// neither is retried.
    #[instrument(skip_all, fields(x = x.name(), o = o.name(), starting_player = %starting_player))]
    pub fn play_game(
        &mut self,
        x: &mut dyn Strategy,
        o: &mut dyn Strategy,
        starting_player: Player,
    ) -> Result<GameResult> {
        self.engine.reset_game();
        self.engine.start_game(starting_player, None);

        while !self.engine.is_game_finished() {
            let player = self.engine.current_player();
            let strategy: &mut dyn Strategy = match player {
                Player::X => &mut *x,
                Player::O => &mut *o,
            };

            let choice = strategy.select_move(self.engine.state(), player).map_err(|e| {
                error!(player = strategy.name(), mark = %player, error = %e, "strategy failed");
                e
            })?;

            let position = match choice {
                MoveChoice::Play(position) => position,
                MoveChoice::Abstain => {
                    warn!(player = strategy.name(), mark = %player, "forfeit");
                    return Ok(GameResult::from_state(
                        self.engine.state(),
                        Some(player.opponent()),
                        starting_player,
                    ));
                }
            };

            if let Err(reason) = self.engine.try_make_move(player, position) {
                error!(player = strategy.name(), mark = %player, position, %reason, "invalid move from strategy");
                return Err(Error::IllegalMove {
                    player_name: strategy.name().to_string(),
                    player,
                    position,
                    reason,
                });
            }
        }

        Ok(GameResult::from_state(
            self.engine.state(),
            self.engine.winner(),
            starting_player,
        ))
    }

    /// State of the current (or last) game.
    #[must_use]
    pub fn current_state(&self) -> &GameState {
        self.engine.state()
    }

    /// Check if the current game is over.
    #[must_use]
    pub fn is_game_finished(&self) -> bool {
        self.engine.is_game_finished()
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}
