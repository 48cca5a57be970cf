//! Core value types: players, actions, state snapshots, RNG.
//!
//! These are leaf types with no knowledge of legality. Legality lives in
//! [`crate::rules`] and is enforced by [`crate::engine::GameEngine`].

pub mod player;
pub mod rng;
pub mod action;
pub mod state;

pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use action::{ActionKind, GameAction};
pub use state::{Board, Cell, GameId, GameState, GameStatus, HistoryState, Move, RootState, BOARD_SIZE};
