//! Error types for the engine crate.
//!
//! Rejected moves are not errors here: they are [`MoveRejection`] values
//! returned by the engine so interactive callers can retry. `Error` covers
//! contract violations by automated players and exporter I/O.

use thiserror::Error;

use crate::core::Player;
use crate::rules::MoveRejection;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("player {player_name} ({player}) made invalid move at position {position}: {reason}")]
    IllegalMove {
        player_name: String,
        player: Player,
        position: i32,
        #[source]
        reason: MoveRejection,
    },

    #[error("player {player_name} ({player}) has no available moves")]
    NoAvailableMoves { player_name: String, player: Player },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an I/O error with the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
