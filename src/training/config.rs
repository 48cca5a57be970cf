//! Batch training configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a batch of random-vs-random games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of games to play.
    pub number_of_games: usize,

    /// Seed of the strategy playing `X`.
    pub first_seed: u64,

    /// Seed of the strategy playing `O`.
    pub second_seed: u64,

    /// Fraction of the batch between progress reports (0.1 = every 10%).
    /// The final game is always reported.
    pub report_fraction: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            number_of_games: 1000,
            first_seed: 42,
            second_seed: 123,
            report_fraction: 0.1,
        }
    }
}

impl TrainingConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.number_of_games = games;
        self
    }

    /// Set both strategy seeds.
    pub fn with_seeds(mut self, first: u64, second: u64) -> Self {
        self.first_seed = first;
        self.second_seed = second;
        self
    }

    /// Set the reporting fraction.
    pub fn with_report_fraction(mut self, fraction: f64) -> Self {
        self.report_fraction = fraction;
        self
    }

    /// Games between progress reports (at least 1).
    pub fn report_interval(&self) -> usize {
        let interval = (self.number_of_games as f64 * self.report_fraction).floor() as usize;
        interval.max(1)
    }

    /// Check if progress should be reported after `completed` games.
    pub fn should_report(&self, completed: usize) -> bool {
        completed % self.report_interval() == 0 || completed == self.number_of_games
    }
}
