//! # tictactoe-engine
//!
//! A tic-tac-toe game-state engine with a reducer-based store, pluggable
//! player strategies and a batch self-play loop.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: every action produces a new `RootState`;
//!    previously returned states never change. Move history uses `im-rs`
//!    so snapshots share structure.
//!
//! 2. **Pure Reducers**: reducers are total and never validate. A
//!    `MakeMove` on a finished game or an occupied cell is applied as
//!    given, so legality must be checked first.
//!
//! 3. **Single Legality Gate**: `GameEngine` validates moves before
//!    dispatching them and is the only way the training loops touch state.
//!
//! ## Modules
//!
//! - `core`: players, actions, board and state snapshots, RNG
//! - `rules`: winning lines, status evaluation, move validation
//! - `store`: reducers and the `Store`
//! - `engine`: `GameEngine`, the validated facade over the store
//! - `players`: the `Strategy` trait, random and interactive players
//! - `training`: single-game loop, batch loop, metrics, JSON-lines export
//! - `error`: crate error type

pub mod core;
pub mod rules;
pub mod store;
pub mod engine;
pub mod players;
pub mod training;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player,
    GameRng, GameRngState,
    ActionKind, GameAction,
    Board, Cell, GameId, GameState, GameStatus, HistoryState, Move, RootState, BOARD_SIZE,
};

pub use crate::rules::{evaluate_status, validate_move, MoveRejection, WINNING_LINES};

pub use crate::store::{GameReducer, HistoryReducer, Reducer, RootReducer, Store};

pub use crate::engine::GameEngine;

pub use crate::players::{InteractiveStrategy, MoveChoice, RandomStrategy, Strategy};

pub use crate::training::{
    GameLoop, GameResult, ProgressSink, TrainingConfig, TrainingLoop, TrainingMetrics,
};

pub use crate::error::{Error, Result};
