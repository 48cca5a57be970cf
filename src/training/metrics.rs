//! Per-game results and batch metrics.

use std::time::Duration;

use im::Vector;

use crate::core::{GameId, GameState, Move, Player};

/// Outcome of one finished or forfeited game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameResult {
    pub game_id: GameId,

    /// Winner, `None` for a draw.
    pub winner: Option<Player>,

    pub move_count: usize,

    /// Time from game start to the last move (zero when no move was made).
    pub duration: Duration,

    pub starting_player: Player,

    pub move_history: Vector<Move>,
}

impl GameResult {
    /// Build a result from a final state with an explicit winner.
    ///
    /// The winner is passed in because a forfeit ends a game that the
    /// board still considers in progress.
    #[must_use]
    pub fn from_state(state: &GameState, winner: Option<Player>, starting_player: Player) -> Self {
        let duration = state
            .move_history()
            .last()
            .and_then(|last| (last.timestamp - state.start_time()).to_std().ok())
            .unwrap_or_default();

        Self {
            game_id: state.game_id().clone(),
            winner,
            move_count: state.move_count(),
            duration,
            starting_player,
            move_history: state.move_history().clone(),
        }
    }

    /// Check if `player` won.
    #[must_use]
    pub fn is_win(&self, player: Player) -> bool {
        self.winner == Some(player)
    }

    /// Check if the game was drawn.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Check if `player` lost.
    #[must_use]
    pub fn is_loss(&self, player: Player) -> bool {
        self.winner.is_some_and(|w| w != player)
    }
}

/// Aggregate statistics for a batch of games.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrainingMetrics {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,

    /// Mean move count over all games (0 for an empty batch).
    pub average_game_length: f64,

    /// Wall-clock time of the whole batch.
    pub total_duration: Duration,
}

impl TrainingMetrics {
    /// Compute metrics over `results`.
    #[must_use]
    pub fn from_results(results: &[GameResult], total_duration: Duration) -> Self {
        let total_games = results.len();
        let count = |winner: Option<Player>| results.iter().filter(|r| r.winner == winner).count();
        let total_moves: usize = results.iter().map(|r| r.move_count).sum();

        Self {
            total_games,
            x_wins: count(Some(Player::X)),
            o_wins: count(Some(Player::O)),
            draws: count(None),
            average_game_length: if total_games > 0 {
                total_moves as f64 / total_games as f64
            } else {
                0.0
            },
            total_duration,
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_games > 0 {
            count as f64 / self.total_games as f64
        } else {
            0.0
        }
    }

    /// Fraction of games won by `X`.
    #[must_use]
    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    /// Fraction of games won by `O`.
    #[must_use]
    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    /// Fraction of drawn games.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Win rate of `player`.
    #[must_use]
    pub fn win_rate(&self, player: Player) -> f64 {
        match player {
            Player::X => self.x_win_rate(),
            Player::O => self.o_win_rate(),
        }
    }

    /// Throughput of the batch.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.total_duration.as_secs_f64();
        if secs > 0.0 {
            self.total_games as f64 / secs
        } else {
            0.0
        }
    }
}
