//! JSON-lines export of training sessions.
//!
//! ## Format
//!
//! One JSON object per line, camelCase keys:
//! - first line: `{"type":"session","data":{...}}` with the metrics, player
//!   names and every game
//! - then one `{"type":"game","data":{...}}` line per game, in play order
//!
//! Durations are `{"secs":..,"nanos":..}` objects so they read back exactly.

use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameId, Move, Player};
use crate::error::{Error, Result};

use super::metrics::{GameResult, TrainingMetrics};

/// One line of an export file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ExportRecord {
    Session(SessionRecord),
    Game(GameRecord),
}

/// Session header: metrics, player names and all games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    pub player_x_name: String,
    pub player_o_name: String,
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub average_game_length: f64,
    pub total_duration: Duration,
    pub games: Vec<GameRecord>,
}

impl SessionRecord {
    /// Build a session record from a finished batch.
    #[must_use]
    pub fn new(
        metrics: &TrainingMetrics,
        results: &[GameResult],
        player_x_name: impl Into<String>,
        player_o_name: impl Into<String>,
    ) -> Self {
        Self {
            session_id: GameId::generate().short().to_string(),
            timestamp: Utc::now(),
            player_x_name: player_x_name.into(),
            player_o_name: player_o_name.into(),
            total_games: metrics.total_games,
            x_wins: metrics.x_wins,
            o_wins: metrics.o_wins,
            draws: metrics.draws,
            average_game_length: metrics.average_game_length,
            total_duration: metrics.total_duration,
            games: results.iter().map(GameRecord::from).collect(),
        }
    }

    /// The metrics stored in this record.
    #[must_use]
    pub fn metrics(&self) -> TrainingMetrics {
        TrainingMetrics {
            total_games: self.total_games,
            x_wins: self.x_wins,
            o_wins: self.o_wins,
            draws: self.draws,
            average_game_length: self.average_game_length,
            total_duration: self.total_duration,
        }
    }
}

/// One game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_id: GameId,
    /// Time of the first move, or of the export for games without moves.
    pub timestamp: DateTime<Utc>,
    pub winner: Option<Player>,
    pub move_count: usize,
    pub duration: Duration,
    pub starting_player: Player,
    pub moves: Vec<MoveRecord>,
}

impl From<&GameResult> for GameRecord {
    fn from(result: &GameResult) -> Self {
        Self {
            game_id: result.game_id.clone(),
            timestamp: result
                .move_history
                .front()
                .map_or_else(Utc::now, |first| first.timestamp),
            winner: result.winner,
            move_count: result.move_count,
            duration: result.duration,
            starting_player: result.starting_player,
            moves: result.move_history.iter().map(MoveRecord::from).collect(),
        }
    }
}

impl From<&GameRecord> for GameResult {
    fn from(record: &GameRecord) -> Self {
        Self {
            game_id: record.game_id.clone(),
            winner: record.winner,
            move_count: record.move_count,
            duration: record.duration,
            starting_player: record.starting_player,
            move_history: record
                .moves
                .iter()
                .map(|m| Move {
                    player: m.player,
                    position: m.position,
                    timestamp: m.timestamp,
                })
                .collect(),
        }
    }
}

/// One move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub player: Player,
    pub position: usize,
    pub timestamp: DateTime<Utc>,
}

impl From<&Move> for MoveRecord {
    fn from(m: &Move) -> Self {
        Self {
            player: m.player,
            position: m.position,
            timestamp: m.timestamp,
        }
    }
}

/// Write a session header followed by one line per game.
pub fn write_session<W: Write>(mut writer: W, session: &SessionRecord) -> Result<()> {
    let write_record = |writer: &mut W, record: &ExportRecord| -> Result<()> {
        serde_json::to_writer(&mut *writer, record)?;
        writeln!(writer).map_err(|e| Error::io("write export line", e))
    };

    write_record(&mut writer, &ExportRecord::Session(session.clone()))?;
    for game in &session.games {
        write_record(&mut writer, &ExportRecord::Game(game.clone()))?;
    }

    writer.flush().map_err(|e| Error::io("flush export", e))
}

/// Save a batch to `path`, creating parent directories.
///
/// Returns the session record that was written.
pub fn save_to_json_lines(
    path: impl AsRef<Path>,
    metrics: &TrainingMetrics,
    results: &[GameResult],
    player_x_name: &str,
    player_o_name: &str,
) -> Result<SessionRecord> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| Error::io(format!("create {}", dir.display()), e))?;
    }

    let file = File::create(path).map_err(|e| Error::io(format!("create {}", path.display()), e))?;
    let session = SessionRecord::new(metrics, results, player_x_name, player_o_name);
    write_session(BufWriter::new(file), &session)?;

    info!(path = %path.display(), games = results.len(), "exported training session");
    Ok(session)
}

/// Read every record from a JSON-lines export. Blank lines are skipped.
pub fn read_json_lines<R: BufRead>(reader: R) -> Result<Vec<ExportRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| Error::io("read export line", e))?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

/// `data/training/training-YYYYMMDD-HHMMSS.jsonl`, local time.
#[must_use]
pub fn default_export_path() -> PathBuf {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    Path::new("data")
        .join("training")
        .join(format!("training-{stamp}.jsonl"))
}
