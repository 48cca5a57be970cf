//! Uniform-random strategy.

use crate::core::{GameRng, GameRngState, GameState, Player};
use crate::error::{Error, Result};

use super::{MoveChoice, Strategy};

/// Picks uniformly among the empty cells.
///
/// Deterministic for a given seed. Never abstains.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    name: String,
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a seeded random strategy.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a random strategy seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(GameRng::from_entropy())
    }

    /// Resume from a checkpointed RNG state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(state))
    }

    fn from_rng(rng: GameRng) -> Self {
        Self {
            name: "Random AI".to_string(),
            rng,
        }
    }

    /// Override the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Checkpoint the RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, state: &GameState, player: Player) -> Result<MoveChoice> {
        let available = state.available_positions();
        let position = self
            .rng
            .pick_cell(&available)
            .ok_or_else(|| Error::NoAvailableMoves {
                player_name: self.name.clone(),
                player,
            })?;
        Ok(MoveChoice::Play(position as i32))
    }
}
