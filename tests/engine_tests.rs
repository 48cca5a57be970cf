//! Integration tests for the store, reducers and game engine.

use tictactoe_engine::rules::WINNING_LINES;
use tictactoe_engine::{
    ActionKind, Cell, GameAction, GameEngine, GameId, GameStatus, MoveRejection, Player, Reducer,
    RootReducer, RootState, Store,
};

/// Play `moves` in order with alternating players, starting with `first`.
fn play(engine: &mut GameEngine, first: Player, moves: &[i32]) {
    let mut player = first;
    for &position in moves {
        engine.make_move(player, position).unwrap();
        player = player.opponent();
    }
}

// =============================================================================
// Game Scenarios
// =============================================================================

#[test]
fn test_x_wins_top_row() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    play(&mut engine, Player::X, &[0, 3, 1, 4, 2]);

    let state = engine.state();
    assert_eq!(state.status(), GameStatus::XWins);
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.move_count(), 5);
    // Mover stays current on a terminal move
    assert_eq!(state.current_player(), Player::X);
    assert!(engine.is_game_finished());
}

#[test]
fn test_o_starts_and_wins_diagonal() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::O, None);
    play(&mut engine, Player::O, &[0, 1, 4, 2, 8]);

    assert_eq!(engine.state().status(), GameStatus::OWins);
    assert_eq!(engine.winner(), Some(Player::O));
}

#[test]
fn test_x_wins_anti_diagonal() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    play(&mut engine, Player::X, &[4, 0, 2, 1, 6]);

    let state = engine.state();
    assert_eq!(state.status(), GameStatus::XWins);
    assert_eq!(state.winner(), Some(Player::X));
    for position in [2, 4, 6] {
        assert_eq!(state.player_at(position), Some(Player::X));
    }
    assert_eq!(state.move_count(), 5);
}

#[test]
fn test_center_opening_draw() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    // X@0 O@4 X@8 O@2 X@6 O@3 X@5 O@7 X@1
    play(&mut engine, Player::X, &[0, 4, 8, 2, 6, 3, 5, 7, 1]);

    let state = engine.state();
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.winner(), None);
    assert!(state.available_positions().is_empty());
    assert_eq!(state.move_count(), 9);
}

#[test]
fn test_full_board_draw() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    // X O X / X O O / O X X
    play(&mut engine, Player::X, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let state = engine.state();
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.winner(), None);
    assert!(state.available_positions().is_empty());
    assert_eq!(state.move_count(), 9);
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    // X O X / O X O / O X X, X completes the main diagonal with the 9th move
    play(&mut engine, Player::X, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert_eq!(engine.state().status(), GameStatus::XWins);
    assert!(engine.state().available_positions().is_empty());
}

#[test]
fn test_every_winning_line_is_detected() {
    for line in WINNING_LINES {
        for winner in Player::all() {
            let mut engine = GameEngine::new();
            engine.start_game(winner, None);

            // Two loser marks can never complete a line of their own
            let mut filler = (0..9).filter(|p| !line.contains(p));
            for &cell in &line[..2] {
                engine.make_move(winner, cell as i32).unwrap();
                let blocker = filler.next().unwrap();
                engine.make_move(winner.opponent(), blocker as i32).unwrap();
            }
            engine.make_move(winner, line[2] as i32).unwrap();

            assert_eq!(engine.winner(), Some(winner), "line {line:?} for {winner}");
        }
    }
}

// =============================================================================
// Validation Through the Engine
// =============================================================================

#[test]
fn test_occupied_position_rejected() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    play(&mut engine, Player::X, &[4]);

    assert_eq!(engine.try_make_move(Player::O, 4), Err(MoveRejection::PositionOccupied));
    assert_eq!(engine.state().move_count(), 1);
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);

    for position in [-1, 9, 100] {
        assert_eq!(
            engine.try_make_move(Player::X, position),
            Err(MoveRejection::PositionOutOfRange { position })
        );
    }
    assert_eq!(engine.state().move_count(), 0);
}

#[test]
fn test_wrong_turn_rejected() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);

    let err = engine.try_make_move(Player::O, 0).unwrap_err();
    assert_eq!(err, MoveRejection::NotPlayersTurn { player: Player::O });
    assert_eq!(err.to_string(), "It's not O's turn");
}

#[test]
fn test_no_moves_after_terminal() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    play(&mut engine, Player::X, &[0, 3, 1, 4, 2]);

    for position in 0..9 {
        for player in Player::all() {
            assert_eq!(
                engine.try_make_move(player, position),
                Err(MoveRejection::GameNotInProgress)
            );
        }
    }
    assert_eq!(engine.state().move_count(), 5);
}

#[test]
fn test_turns_alternate() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::O, None);

    let mut expected = Player::O;
    for position in [4, 0, 8, 2, 6] {
        assert_eq!(engine.current_player(), expected);
        engine.make_move(expected, position).unwrap();
        if engine.is_game_finished() {
            break;
        }
        expected = expected.opponent();
    }

    let players: Vec<_> = engine.state().move_history().iter().map(|m| m.player).collect();
    assert!(players.windows(2).all(|w| w[0] != w[1]));
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_reset_keeps_game_id() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::O, Some(GameId::new("keep-me")));
    play(&mut engine, Player::O, &[4, 0]);

    engine.reset_game();

    let state = engine.state();
    assert_eq!(state.game_id().as_str(), "keep-me");
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.move_count(), 0);
    assert!(state.board().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_start_game_generates_fresh_ids() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    let first = engine.state().game_id().clone();
    engine.start_game(Player::X, None);

    assert_ne!(&first, engine.state().game_id());
    assert_eq!(first.as_str().len(), 32);
}

#[test]
fn test_start_game_mid_game_restarts() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    play(&mut engine, Player::X, &[0, 1, 2]);

    engine.start_game(Player::O, Some(GameId::new("second")));

    assert_eq!(engine.state().move_count(), 0);
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.state().game_id().as_str(), "second");
}

#[test]
fn test_history_records_every_dispatch() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    play(&mut engine, Player::X, &[0, 4]);
    let _ = engine.try_make_move(Player::X, 4);
    engine.reset_game();

    let history = engine.history();
    assert_eq!(history.action_count(), 4);
    assert_eq!(history.actions_of_kind(ActionKind::MakeMove).count(), 2);
    assert_eq!(history.last_action(), Some(&GameAction::ResetGame));
}

#[test]
fn test_queries_are_idempotent() {
    let mut engine = GameEngine::new();
    engine.start_game(Player::X, None);
    play(&mut engine, Player::X, &[4, 0]);

    let before = engine.state().clone();
    for _ in 0..3 {
        let _ = engine.is_game_finished();
        let _ = engine.current_player();
        let _ = engine.winner();
        let _ = engine.is_valid_move(Player::X, 8);
        let _ = engine.state().available_positions();
    }
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.history().action_count(), 3);
}

// =============================================================================
// Store and Reducers
// =============================================================================

#[test]
fn test_snapshots_are_immutable() {
    let mut store = Store::new(Player::X, Some(GameId::new("s")));
    let before = store.state().clone();

    store.dispatch(GameAction::make_move(Player::X, 4));

    assert_eq!(before.game.move_count(), 0);
    assert_eq!(store.state().game.move_count(), 1);
    assert_eq!(store.state().game.player_at(4), Some(Player::X));
}

#[test]
fn test_reducer_applies_unvalidated_moves() {
    let reducer = RootReducer::new();
    let state = RootState::new(Player::X, Some(GameId::new("raw")));

    // Wrong player, accepted as given
    let next = reducer.reduce(&state, &GameAction::make_move(Player::O, 0));
    assert_eq!(next.game.player_at(0), Some(Player::O));
    assert_eq!(next.game.current_player(), Player::X);

    // Overwrite an occupied cell
    let next = reducer.reduce(&next, &GameAction::make_move(Player::X, 0));
    assert_eq!(next.game.player_at(0), Some(Player::X));
    assert_eq!(next.game.move_count(), 2);
    assert_eq!(next.history.action_count(), 2);
}

#[test]
fn test_reducer_ignores_positions_off_the_board() {
    let reducer = RootReducer::new();
    let state = RootState::new(Player::X, Some(GameId::new("off")));

    let next = reducer.reduce(&state, &GameAction::make_move(Player::X, 9));

    assert_eq!(next.game, state.game);
    assert_eq!(next.history.action_count(), 1);
}
