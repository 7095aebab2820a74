//! Integration tests for the rules facade contract.

use rust_gomoku::{BoardState, ConfigError, GameRules, Gomoku, MoveError, Outcome, Player};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_construction_rejects_bad_config() {
    assert_eq!(Gomoku::new(0, 3), Err(ConfigError::BoardSize(0)));
    assert_eq!(
        Gomoku::new(3, 4),
        Err(ConfigError::RunLength { size: 3, run_length: 4 })
    );
}

#[test]
fn test_fresh_game_is_open() {
    let game = Gomoku::new(5, 3).unwrap();
    let state = game.initial_state();

    assert_eq!(game.outcome(&state, Player::ONE), Outcome::NotEnded);
    assert_eq!(game.outcome(&state, Player::TWO), Outcome::NotEnded);

    let mask = game.valid_moves(&state, Player::ONE).unwrap();
    assert_eq!(mask.len(), 25);
    assert!(mask.iter().all(|&m| m));
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn test_apply_returns_fresh_snapshot() {
    let game = Gomoku::new(5, 3).unwrap();
    let state = game.initial_state();

    let (next, next_player) = game.apply(&state, Player::ONE, 12).unwrap();

    // The caller's original state is untouched.
    assert_eq!(state, game.initial_state());
    assert_eq!(next.get(2, 2), 1);
    assert_eq!(next_player, Player::TWO);
}

#[test]
fn test_apply_occupied_cell_is_contract_violation() {
    let game = Gomoku::new(5, 3).unwrap();
    let state = game.initial_state();

    let (state, _) = game.apply(&state, Player::ONE, 7).unwrap();
    let err = game.apply(&state, Player::TWO, 7).unwrap_err();
    assert_eq!(err, MoveError::Occupied { row: 1, col: 2 });

    // Same cell, same player: still a violation.
    let err = game.apply(&state, Player::ONE, 7).unwrap_err();
    assert_eq!(err, MoveError::Occupied { row: 1, col: 2 });
}

#[test]
fn test_apply_rejects_action_past_pass() {
    let game = Gomoku::new(3, 3).unwrap();
    let state = game.initial_state();

    assert_eq!(
        game.apply(&state, Player::ONE, 42),
        Err(MoveError::OutOfRange { action: 42, pass_action: 9 })
    );
}

#[test]
fn test_pass_flips_player_only() {
    let game = Gomoku::new(3, 3).unwrap();
    let state = game.initial_state();

    let (after, next) = game.apply(&state, Player::TWO, game.pass_action()).unwrap();
    assert_eq!(after, state);
    assert_eq!(next, Player::ONE);
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_three_in_a_row_wins_for_player_one() {
    let game = Gomoku::new(5, 3).unwrap();
    let mut state = game.initial_state();

    for action in [0, 1, 2] {
        state = game.apply(&state, Player::ONE, action).unwrap().0;
    }

    assert_eq!(game.outcome(&state, Player::ONE), Outcome::Win);
}

#[test]
fn test_three_in_a_row_by_player_two_is_a_loss() {
    let game = Gomoku::new(5, 3).unwrap();
    let mut state = game.initial_state();

    for action in [0, 1, 2] {
        state = game.apply(&state, Player::TWO, action).unwrap().0;
    }

    // Absolute player-one perspective, independent of who asks.
    assert_eq!(game.outcome(&state, Player::ONE), Outcome::Loss);
    assert_eq!(game.outcome(&state, Player::TWO), Outcome::Loss);
}

#[test]
fn test_full_board_without_run_is_a_draw() {
    // X O X
    // O X O
    // O X O
    let game = Gomoku::new(3, 3).unwrap();
    let state = BoardState::from_cells(3, vec![1, -1, 1, -1, 1, -1, -1, 1, -1]);

    assert_eq!(game.outcome(&state, Player::ONE), Outcome::Draw);
    assert_eq!(game.outcome(&state, Player::TWO), Outcome::Draw);
}

#[test]
fn test_win_on_final_cell_beats_draw() {
    // X O X
    // O X O
    // O O X   <- the (2,2) stone completes the main diagonal
    let game = Gomoku::new(3, 3).unwrap();
    let state = BoardState::from_cells(3, vec![1, -1, 1, -1, 1, -1, -1, -1, 1]);

    assert_eq!(game.outcome(&state, Player::ONE), Outcome::Win);
}

// =============================================================================
// Valid-move sentinel
// =============================================================================

#[test]
fn test_no_moves_sentinel_only_on_full_board() {
    let game = Gomoku::new(2, 2).unwrap();
    let mut state = game.initial_state();

    let players = [Player::ONE, Player::TWO, Player::ONE, Player::TWO];
    for (action, player) in players.iter().enumerate() {
        assert!(
            game.valid_moves(&state, *player).is_some(),
            "board with empty cells must yield a mask"
        );
        state = game.apply(&state, *player, action).unwrap().0;
    }

    assert_eq!(game.valid_moves(&state, Player::ONE), None);
}

// =============================================================================
// Canonical form
// =============================================================================

#[test]
fn test_canonical_form_identity_for_player_one() {
    let game = Gomoku::new(5, 3).unwrap();
    let (state, _) = game
        .apply(&game.initial_state(), Player::ONE, 6)
        .unwrap();

    assert_eq!(game.canonical_form(&state, Player::ONE), state);
}

#[test]
fn test_canonical_form_double_negation_restores() {
    let game = Gomoku::new(5, 3).unwrap();
    let mut state = game.initial_state();
    state = game.apply(&state, Player::ONE, 0).unwrap().0;
    state = game.apply(&state, Player::TWO, 8).unwrap().0;

    let flipped = game.canonical_form(&state, Player::TWO);
    assert_eq!(flipped.get(0, 0), -1);
    assert_eq!(flipped.get(1, 3), 1);

    assert_eq!(game.canonical_form(&flipped, Player::TWO), state);
}

// =============================================================================
// Serialization keys
// =============================================================================

#[test]
fn test_serialize_is_canonical_per_contents() {
    let game = Gomoku::new(5, 3).unwrap();
    let a = game.apply(&game.initial_state(), Player::ONE, 3).unwrap().0;
    let b = game.apply(&game.initial_state(), Player::ONE, 3).unwrap().0;

    assert_eq!(game.serialize(&a), game.serialize(&b));
}

#[test]
fn test_serialize_distinguishes_contents() {
    let game = Gomoku::new(5, 3).unwrap();
    let empty = game.initial_state();

    let mut keys = vec![game.serialize(&empty)];
    for action in 0..game.action_count() {
        let (state, _) = game.apply(&empty, Player::ONE, action).unwrap();
        keys.push(game.serialize(&state));
        let (state, _) = game.apply(&empty, Player::TWO, action).unwrap();
        keys.push(game.serialize(&state));
    }

    let distinct: std::collections::HashSet<_> = keys.iter().collect();
    assert_eq!(distinct.len(), keys.len());
}
