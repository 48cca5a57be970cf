//! Batch self-play.
//!
//! ## Overview
//!
//! - **GameLoop**: plays one game between two strategies on an owned engine
//! - **TrainingLoop**: plays a batch, alternating the starting player
//! - **TrainingMetrics**: win/draw counts, average length, batch duration
//! - **export**: JSON-lines session files
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tictactoe_engine::training::{export, TrainingConfig, TrainingLoop};
//!
//! let config = TrainingConfig::default();
//! let mut training = TrainingLoop::new();
//! let mut report = |n: usize| println!("{n}/{}", config.number_of_games);
//!
//! let metrics = training.run_with_config(&config, Some(&mut report))?;
//! export::save_to_json_lines(
//!     export::default_export_path(),
//!     &metrics,
//!     training.results(),
//!     "Random AI",
//!     "Random AI",
//! )?;
//! # Ok::<(), tictactoe_engine::Error>(())
//! ```

pub mod config;
pub mod export;
pub mod game_loop;
pub mod metrics;
pub mod training_loop;

pub use config::TrainingConfig;
pub use export::{ExportRecord, GameRecord, MoveRecord, SessionRecord};
pub use game_loop::GameLoop;
pub use metrics::{GameResult, TrainingMetrics};
pub use training_loop::{starting_player_for, ProgressSink, TrainingLoop};
