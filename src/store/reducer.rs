//! Pure reducers: `(state, action) -> new state`.
//!
//! - `GameReducer` applies game mechanics
//! - `HistoryReducer` appends every action to the audit log
//! - `RootReducer` runs both side by side on a `RootState`
//!
//! Reducers never check legality. `GameReducer` applied to an illegal
//! `MakeMove` produces a state that breaks the `GameState` invariants, which
//! is why moves must go through [`crate::engine::GameEngine`].

use crate::core::{Cell, GameAction, GameState, HistoryState, Move, Player, RootState};
use crate::rules::status_after_move;

/// A pure state transition function.
///
/// Implementations must not mutate `state`; they return a new value and
/// return an equal copy of `state` for actions they do not handle.
pub trait Reducer {
    /// The state this reducer transforms.
    type State;

    /// Compute the state that follows `action`.
    fn reduce(&self, state: &Self::State, action: &GameAction) -> Self::State;
}

/// Game mechanics.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameReducer;

impl GameReducer {
    fn make_move(state: &GameState, player: Player, position: usize) -> GameState {
        let mut board = state.board;
        match board.get_mut(position) {
            Some(cell) => *cell = Cell::Occupied(player),
            // Unrepresentable position: nothing to place
            None => return state.clone(),
        }

        let mut move_history = state.move_history.clone();
        move_history.push_back(Move::new(player, position));

        let status = status_after_move(&board, position);
        let current_player = if status.is_finished() {
            state.current_player
        } else {
            player.opponent()
        };

        GameState {
            board,
            current_player,
            status,
            move_history,
            game_id: state.game_id.clone(),
            start_time: state.start_time,
        }
    }
}

impl Reducer for GameReducer {
    type State = GameState;

    fn reduce(&self, state: &GameState, action: &GameAction) -> GameState {
        match action {
            GameAction::StartGame {
                starting_player,
                game_id,
            } => GameState::new(*starting_player, game_id.clone()),
            GameAction::MakeMove { player, position } => Self::make_move(state, *player, *position),
            GameAction::ResetGame => GameState::new(Player::X, Some(state.game_id.clone())),
        }
    }
}

/// Audit log of every dispatched action, legal or not.
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryReducer;

impl Reducer for HistoryReducer {
    type State = HistoryState;

    fn reduce(&self, state: &HistoryState, action: &GameAction) -> HistoryState {
        let mut actions = state.actions.clone();
        actions.push_back(action.clone());
        HistoryState { actions }
    }
}

/// Runs the game and history reducers in parallel on the same action.
#[derive(Clone, Copy, Debug, Default)]
pub struct RootReducer {
    game: GameReducer,
    history: HistoryReducer,
}

impl RootReducer {
    /// Create a root reducer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reducer for RootReducer {
    type State = RootState;

    fn reduce(&self, state: &RootState, action: &GameAction) -> RootState {
        RootState {
            game: self.game.reduce(&state.game, action),
            history: self.history.reduce(&state.history, action),
        }
    }
}
