//! The store: sole owner and mutator of the `RootState`.

use tracing::trace;

use crate::core::{GameAction, GameId, Player, RootState};

use super::reducer::{Reducer, RootReducer};

/// Holds the current `RootState` and replaces it on every dispatch.
///
/// No legality checks, no deduplication, no undo. Each dispatch swaps in a
/// whole new value, so previously returned snapshots stay valid.
#[derive(Clone, Debug)]
pub struct Store {
    state: RootState,
    reducer: RootReducer,
}

impl Store {
    /// Create a store holding a fresh game.
    #[must_use]
    pub fn new(starting_player: Player, game_id: Option<GameId>) -> Self {
        Self::with_state(RootState::new(starting_player, game_id))
    }

    /// Create a store from an existing state.
    #[must_use]
    pub fn with_state(state: RootState) -> Self {
        Self {
            state,
            reducer: RootReducer::new(),
        }
    }

    /// The current composed state.
    #[must_use]
    pub fn state(&self) -> &RootState {
        &self.state
    }

    /// Apply `action` through the root reducer.
    pub fn dispatch(&mut self, action: GameAction) {
        trace!(kind = action.kind().name(), "dispatch");
        self.state = self.reducer.reduce(&self.state, &action);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::with_state(RootState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;

    #[test]
    fn test_dispatch_replaces_state() {
        let mut store = Store::new(Player::X, Some(GameId::new("s")));
        let before = store.state().clone();

        store.dispatch(GameAction::make_move(Player::X, 0));

        assert_eq!(before.game.move_count(), 0);
        assert_eq!(store.state().game.move_count(), 1);
        assert_eq!(store.state().history.action_count(), 1);
    }

    #[test]
    fn test_dispatch_does_not_deduplicate() {
        let mut store = Store::default();
        store.dispatch(GameAction::ResetGame);
        store.dispatch(GameAction::ResetGame);

        assert_eq!(store.state().history.action_count(), 2);
        assert_eq!(store.state().game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_start_keeps_history() {
        let mut store = Store::default();
        store.dispatch(GameAction::make_move(Player::X, 4));
        store.dispatch(GameAction::start(Player::O));

        assert_eq!(store.state().game.move_count(), 0);
        assert_eq!(store.state().game.current_player(), Player::O);
        assert_eq!(store.state().history.action_count(), 2);
    }
}
