//! Seeded move selection for automated players.
//!
//! Two players built from the same seeds replay the same games, which is what
//! makes a training batch reproducible. The RNG position can be captured and
//! restored so a player can resume mid-batch.
//!
//! ```
//! use tictactoe_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let empty_cells = [0usize, 2, 4, 6, 8];
//! assert_eq!(a.pick_cell(&empty_cells), b.pick_cell(&empty_cells));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream tagged with the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create an RNG whose stream is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeded from the operating system; the seed is still recorded.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`, `None` when `len` is zero.
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }

    /// Uniform pick among `cells`, `None` when there is nothing to pick.
    pub fn pick_cell(&mut self, cells: &[usize]) -> Option<usize> {
        self.next_index(cells.len()).map(|i| cells[i])
    }

    /// Current stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream exactly where [`GameRng::state`] left it.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Seed plus ChaCha8 word position; restoring is O(1) however far the
/// stream has advanced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
