//! Legality gate over the store.
//!
//! `GameEngine` validates moves with [`crate::rules::validate_move`] before
//! dispatching them, and exposes read-only queries for renderers, players
//! and the training loops.

pub mod game_engine;

pub use game_engine::GameEngine;
