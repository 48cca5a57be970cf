//! Game state: immutable snapshots of one game plus the audit trail.
//!
//! ## GameState
//!
//! Board, side to move, status, move history, id and start time.
//! A `GameState` is never mutated after construction: every transition
//! builds a new value (see [`crate::store::GameReducer`]). Move history uses
//! `im` persistent vectors so snapshots are O(1) to clone and a snapshot held
//! by a renderer is never affected by later moves.
//!
//! ## HistoryState / RootState
//!
//! `HistoryState` is the append-only log of every dispatched action.
//! `RootState` composes both and is owned by the [`crate::store::Store`].

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionKind, GameAction};
use super::player::Player;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Opaque, stable game identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier (32 hex digits).
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{:032x}", rand::random::<u128>()))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for compact display.
    #[must_use]
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map_or(self.0.len(), |(i, _)| i);
        &self.0[..end]
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Numeric value for line sums: empty = 0, `X` = +1, `O` = -1.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.sign(),
        }
    }

    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player occupying this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(player) => player.to_char(),
        }
    }
}

/// The board: 9 cells in row-major order.
pub type Board = [Cell; BOARD_SIZE];

/// Phase or outcome of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// The first player (`X`) completed a line.
    XWins,
    /// The second player (`O`) completed a line.
    OWins,
    /// Full board, no completed line.
    Draw,
}

impl GameStatus {
    /// Status for a win by `player`.
    #[must_use]
    pub const fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWins,
            Player::O => GameStatus::OWins,
        }
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// The winning player, or `None` while playing or on a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWins => Some(Player::X),
            GameStatus::OWins => Some(Player::O),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }
}

/// A single placed mark.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: Player,

    /// Board position (0-8).
    pub position: usize,

    /// When the move was applied.
    pub timestamp: DateTime<Utc>,
}

impl Move {
    /// Create a move stamped with the current time.
    #[must_use]
    pub fn new(player: Player, position: usize) -> Self {
        Self {
            player,
            position,
            timestamp: Utc::now(),
        }
    }

    /// Zero-based (row, column) of this move.
    #[must_use]
    pub const fn coordinates(&self) -> (usize, usize) {
        (self.position / 3, self.position % 3)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (row, col) = self.coordinates();
        let kind = match self.position {
            4 => "center",
            0 | 2 | 6 | 8 => "corner",
            _ => "edge",
        };
        write!(
            f,
            "{} at position {} ({}, row {}, col {})",
            self.player,
            self.position,
            kind,
            row + 1,
            col + 1
        )
    }
}

/// Snapshot of one game.
///
/// Invariants:
/// - `move_history.len()` equals the number of occupied cells
/// - once `status` is finished no transition other than start/reset applies
/// - `current_player` is only meaningful while playing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) move_history: Vector<Move>,
    pub(crate) game_id: GameId,
    pub(crate) start_time: DateTime<Utc>,
}

impl GameState {
    /// Create a fresh game: empty board, `Playing`, no moves, started now.
    ///
    /// A random id is generated when `game_id` is `None`.
    #[must_use]
    pub fn new(starting_player: Player, game_id: Option<GameId>) -> Self {
        Self {
            board: [Cell::Empty; BOARD_SIZE],
            current_player: starting_player,
            status: GameStatus::Playing,
            move_history: Vector::new(),
            game_id: game_id.unwrap_or_else(GameId::generate),
            start_time: Utc::now(),
        }
    }

    // === Accessors ===

    /// The board cells in row-major order.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move. Only meaningful while playing.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves in play order.
    #[must_use]
    pub fn move_history(&self) -> &Vector<Move> {
        &self.move_history
    }

    /// Game identifier.
    #[must_use]
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// When the game was created.
    #[must_use]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    // === Derived Queries ===

    /// The winner, if the game ended in a win.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Number of moves played.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Wall-clock time since the game started.
    #[must_use]
    pub fn elapsed(&self) -> std::time::Duration {
        (Utc::now() - self.start_time).to_std().unwrap_or_default()
    }

    /// Check if a position is on the board and empty.
    ///
    /// Out-of-range positions are never empty.
    #[must_use]
    pub fn is_position_empty(&self, position: usize) -> bool {
        self.board.get(position).is_some_and(|cell| cell.is_empty())
    }

    /// Empty positions in ascending order.
    #[must_use]
    pub fn available_positions(&self) -> Vec<usize> {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// The player occupying `position`, if any.
    #[must_use]
    pub fn player_at(&self, position: usize) -> Option<Player> {
        self.board.get(position).and_then(|cell| cell.player())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.board.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let c = |col: usize| self.board[row * 3 + col].to_char();
            write!(f, "{} | {} | {}", c(0), c(1), c(2))?;
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "---------")?;
            }
        }
        Ok(())
    }
}

/// Append-only log of dispatched actions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryState {
    pub(crate) actions: Vector<GameAction>,
}

impl HistoryState {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// All actions in dispatch order.
    #[must_use]
    pub fn actions(&self) -> &Vector<GameAction> {
        &self.actions
    }

    /// The most recent action.
    #[must_use]
    pub fn last_action(&self) -> Option<&GameAction> {
        self.actions.last()
    }

    /// Actions of one variant, in dispatch order.
    pub fn actions_of_kind(&self, kind: ActionKind) -> impl Iterator<Item = &GameAction> {
        self.actions.iter().filter(move |a| a.kind() == kind)
    }
}

/// Composed state held by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    pub game: GameState,
    pub history: HistoryState,
}

impl RootState {
    /// Fresh game with an empty history.
    #[must_use]
    pub fn new(starting_player: Player, game_id: Option<GameId>) -> Self {
        Self {
            game: GameState::new(starting_player, game_id),
            history: HistoryState::new(),
        }
    }
}

impl Default for RootState {
    fn default() -> Self {
        Self::new(Player::X, None)
    }
}
