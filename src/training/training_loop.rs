//! Sequential batch of games with aggregated metrics.

use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::core::Player;
use crate::error::Result;
use crate::players::{RandomStrategy, Strategy};

use super::config::TrainingConfig;
use super::game_loop::GameLoop;
use super::metrics::{GameResult, TrainingMetrics};

/// Receives the number of games completed so far.
///
/// Advisory only: it never affects which games are played or their outcome.
/// Any `FnMut(usize)` closure is a sink.
pub trait ProgressSink {
    fn report(&mut self, games_completed: usize);
}

impl<F: FnMut(usize)> ProgressSink for F {
    fn report(&mut self, games_completed: usize) {
        self(games_completed)
    }
}

/// Starting player for the game at `index`: `X` on even, `O` on odd.
#[must_use]
pub fn starting_player_for(index: usize) -> Player {
    if index % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Runs batches of games and keeps their results.
///
/// ## Example
///
/// ```
/// use tictactoe_engine::{RandomStrategy, TrainingLoop};
///
/// let mut training = TrainingLoop::new();
/// let mut x = RandomStrategy::new(42);
/// let mut o = RandomStrategy::new(123);
///
/// let metrics = training.run_training(&mut x, &mut o, 10, None).unwrap();
/// assert_eq!(metrics.total_games, 10);
/// assert_eq!(metrics.x_wins + metrics.o_wins + metrics.draws, 10);
/// assert_eq!(training.results().len(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TrainingLoop {
    game_loop: GameLoop,
    results: Vec<GameResult>,
}

impl TrainingLoop {
    /// Create a training loop with its own game loop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a training loop around an existing game loop.
    #[must_use]
    pub fn with_game_loop(game_loop: GameLoop) -> Self {
        Self {
            game_loop,
            results: Vec::new(),
        }
    }

    /// Play `number_of_games` games, alternating the starting player.
    ///
    /// Results of a previous run are discarded. `progress` is called after
    /// every game.
    ///
    /// # Errors
    ///
    /// Stops at the first game that fails (see [`GameLoop::play_game`]).
    /// Results of the games completed before it stay available through
    /// [`TrainingLoop::results`].
    #[instrument(skip_all, fields(x = x.name(), o = o.name(), games = number_of_games))]
    pub fn run_training(
        &mut self,
        x: &mut dyn Strategy,
        o: &mut dyn Strategy,
        number_of_games: usize,
        mut progress: Option<&mut dyn ProgressSink>,
    ) -> Result<TrainingMetrics> {
        self.results.clear();
        self.results.reserve(number_of_games);
        info!("training started");

        let started = Instant::now();
        for index in 0..number_of_games {
            let result = self.game_loop.play_game(x, o, starting_player_for(index))?;
            debug!(index, winner = ?result.winner, moves = result.move_count, "game finished");
            self.results.push(result);

            if let Some(sink) = progress.as_deref_mut() {
                sink.report(index + 1);
            }
        }
        let total_duration = started.elapsed();

        let metrics = TrainingMetrics::from_results(&self.results, total_duration);
        info!(
            x_wins = metrics.x_wins,
            o_wins = metrics.o_wins,
            draws = metrics.draws,
            average_game_length = metrics.average_game_length,
            elapsed_ms = total_duration.as_millis() as u64,
            "training finished"
        );
        Ok(metrics)
    }

    /// Run a random-vs-random batch described by `config`.
    ///
    /// `progress` is only called on the games selected by
    /// [`TrainingConfig::should_report`].
    pub fn run_with_config(
        &mut self,
        config: &TrainingConfig,
        mut progress: Option<&mut dyn ProgressSink>,
    ) -> Result<TrainingMetrics> {
        let mut x = RandomStrategy::new(config.first_seed);
        let mut o = RandomStrategy::new(config.second_seed);

        let mut filtered = |completed: usize| {
            if config.should_report(completed) {
                if let Some(sink) = progress.as_deref_mut() {
                    sink.report(completed);
                }
            }
        };

        self.run_training(&mut x, &mut o, config.number_of_games, Some(&mut filtered))
    }

    /// Results of the last run, in play order.
    #[must_use]
    pub fn results(&self) -> &[GameResult] {
        &self.results
    }
}
