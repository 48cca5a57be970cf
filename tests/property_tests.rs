//! Property tests over random legal move sequences.

use proptest::prelude::*;

use tictactoe_engine::rules::{evaluate_status, status_after_move};
use tictactoe_engine::{GameEngine, GameStatus, MoveRejection, Player};

/// Play legal moves picked by `choices` until the game ends or choices run out.
fn play_choices(starting_player: Player, choices: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    engine.start_game(starting_player, None);

    for &choice in choices {
        if engine.is_game_finished() {
            break;
        }
        let available = engine.state().available_positions();
        let position = available[choice % available.len()];
        engine.make_move(engine.current_player(), position as i32).unwrap();
    }
    engine
}

fn any_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

proptest! {
    #[test]
    fn test_history_matches_board(
        starter in any_player(),
        choices in prop::collection::vec(0usize..9, 0..12),
    ) {
        let engine = play_choices(starter, &choices);
        let state = engine.state();

        prop_assert_eq!(state.move_count(), state.occupied_count());
        for m in state.move_history() {
            prop_assert_eq!(state.player_at(m.position), Some(m.player));
        }
        prop_assert_eq!(state.available_positions().len(), 9 - state.move_count());
    }

    #[test]
    fn test_incremental_status_matches_full_scan(
        starter in any_player(),
        choices in prop::collection::vec(0usize..9, 0..12),
    ) {
        let engine = play_choices(starter, &choices);
        let state = engine.state();

        prop_assert_eq!(state.status(), evaluate_status(state.board()));
        if let Some(last) = state.move_history().last() {
            prop_assert_eq!(status_after_move(state.board(), last.position), state.status());
        }
    }

    #[test]
    fn test_moves_alternate_from_starter(
        starter in any_player(),
        choices in prop::collection::vec(0usize..9, 0..12),
    ) {
        let engine = play_choices(starter, &choices);

        let mut expected = starter;
        for m in engine.state().move_history() {
            prop_assert_eq!(m.player, expected);
            expected = expected.opponent();
        }
        if !engine.is_game_finished() {
            prop_assert_eq!(engine.current_player(), expected);
        }
    }

    #[test]
    fn test_terminal_state_rejects_everything(
        starter in any_player(),
        choices in prop::collection::vec(0usize..9, 9..12),
    ) {
        let mut engine = play_choices(starter, &choices);
        prop_assert!(engine.is_game_finished());

        let before = engine.state().clone();
        for position in -1..10 {
            for player in Player::all() {
                prop_assert_eq!(
                    engine.try_make_move(player, position),
                    Err(MoveRejection::GameNotInProgress)
                );
            }
        }
        prop_assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_winner_matches_status(
        starter in any_player(),
        choices in prop::collection::vec(0usize..9, 9..12),
    ) {
        let engine = play_choices(starter, &choices);
        let state = engine.state();

        match state.status() {
            GameStatus::XWins => prop_assert_eq!(state.winner(), Some(Player::X)),
            GameStatus::OWins => prop_assert_eq!(state.winner(), Some(Player::O)),
            GameStatus::Draw => {
                prop_assert_eq!(state.winner(), None);
                prop_assert_eq!(state.move_count(), 9);
            }
            GameStatus::Playing => prop_assert!(false, "game should be over"),
        }
        if state.winner().is_some() {
            // Winner is the last mover, who stays current
            let last = state.move_history().last().map(|m| m.player);
            prop_assert_eq!(last, state.winner());
            prop_assert_eq!(Some(state.current_player()), state.winner());
        }
    }
}
