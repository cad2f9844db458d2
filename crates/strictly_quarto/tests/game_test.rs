//! Tests for the game coordinator state machine.

use strictly_quarto::invariants::{GameInvariants, InvariantSet};
use strictly_quarto::{
    Board, Game, GameStatus, Normalize, PlaceOutcome, QuartoError, QuartoErrorKind, Status,
    TokenId, TopologyKind,
};

fn standard_game() -> Game {
    Game::new(
        2,
        Board::new(TopologyKind::Bounded, 16, 4, 6, 6).expect("Valid board"),
    )
}

fn torus_game() -> Game {
    Game::new(
        2,
        Board::new(TopologyKind::Toroidal, 16, 4, 6, 6).expect("Valid board"),
    )
}

fn play(game: &mut Game, moves: &[(TokenId, i64, i64)]) -> Vec<PlaceOutcome> {
    moves
        .iter()
        .map(|&(id, row, column)| {
            game.select_token(id).expect("Valid selection");
            game.place_token(row, column).expect("Valid placement")
        })
        .collect()
}

#[test]
fn test_first_exchange() {
    let mut game = standard_game();
    game.select_token(0).expect("Valid selection");
    let outcome = game.place_token(0, 0).expect("Valid placement");

    assert_eq!(outcome, PlaceOutcome::Continue);
    assert_eq!(outcome.to_string(), "OK");
    assert!(!game.is_won());
    assert!(!game.is_draw());
    assert_eq!(game.move_count(), 1);
}

#[test]
fn test_select_placed_token_not_found() {
    let mut game = standard_game();
    play(&mut game, &[(5, 2, 2)]);

    assert_eq!(game.select_token(5), Err(QuartoError::NotFound(5)));
}

#[test]
fn test_select_unknown_token_not_found() {
    let mut game = standard_game();
    let error = game.select_token(16).unwrap_err();
    assert_eq!(error.kind(), QuartoErrorKind::NotFound);
}

#[test]
fn test_second_selection_rejected() {
    let mut game = standard_game();
    game.select_token(1).expect("Valid selection");
    assert_eq!(game.select_token(2), Err(QuartoError::AlreadySelected(1)));
    assert_eq!(game.board().available_tokens().len(), 15);
}

#[test]
fn test_four_black_tokens_in_a_row_win() {
    let mut game = standard_game();
    let outcomes = play(&mut game, &[(0, 0, 0), (1, 0, 1), (2, 0, 2), (3, 0, 3)]);

    assert_eq!(outcomes[..3], [PlaceOutcome::Continue; 3]);
    assert!(matches!(outcomes[3], PlaceOutcome::Won { moves: 3, .. }));
    assert!(game.board().check_win(0, 3));
    assert_eq!(game.status(), GameStatus::Won);
    assert!(game.is_won());
    assert!(!game.is_draw());

    let winner = game.winner().expect("Winner recorded");
    assert_eq!(winner.status(), Status::Winning);
    assert_eq!(outcomes[3].to_string(), format!("P{} wins\n3", winner.number()));
}

#[test]
fn test_no_actions_after_win() {
    let mut game = standard_game();
    play(&mut game, &[(0, 0, 0), (1, 0, 1), (2, 0, 2), (3, 0, 3)]);
    let before = game.clone();

    assert_eq!(game.select_token(4), Err(QuartoError::GameOver));
    assert_eq!(game.place_token(5, 5), Err(QuartoError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_full_board_without_win_is_draw() {
    // 2x2 board: no line can reach four fields
    let mut game = Game::new(
        2,
        Board::new(TopologyKind::Bounded, 16, 4, 2, 2).expect("Valid board"),
    );
    let outcomes = play(&mut game, &[(0, 0, 0), (1, 0, 1), (2, 1, 0), (3, 1, 1)]);

    assert_eq!(outcomes[3], PlaceOutcome::Draw);
    assert_eq!(outcomes[3].to_string(), "draw");
    assert!(game.is_draw());
    assert!(!game.is_won());
    assert!(game.winner().is_none());
    assert_eq!(game.move_count(), 3);
    assert_eq!(game.select_token(4), Err(QuartoError::GameOver));
}

#[test]
fn test_empty_pool_is_draw() {
    let mut game = Game::new(
        2,
        Board::new(TopologyKind::Bounded, 3, 4, 6, 6).expect("Valid board"),
    );
    let outcomes = play(&mut game, &[(0, 0, 0), (1, 5, 5), (2, 2, 3)]);
    assert_eq!(outcomes[2], PlaceOutcome::Draw);
    assert!(game.is_draw());
}

#[test]
fn test_win_takes_precedence_over_full_board() {
    let mut game = Game::new(
        2,
        Board::new(TopologyKind::Bounded, 4, 4, 1, 4).expect("Valid board"),
    );
    let outcomes = play(&mut game, &[(0, 0, 0), (1, 0, 1), (2, 0, 2), (3, 0, 3)]);
    assert!(matches!(outcomes[3], PlaceOutcome::Won { .. }));
    assert!(game.board().is_full());
    assert!(!game.is_draw());
}

#[test]
fn test_toroidal_negative_row_normalizes() {
    let mut game = torus_game();
    assert_eq!(game.board().topology().normalize_row(-1), 5);

    game.select_token(0).expect("Valid selection");
    game.place_token(-1, 0).expect("Valid placement");
    assert_eq!(game.board().field(5, 0).map(|t| t.id()), Some(0));
}

#[test]
fn test_bounded_rejects_outside_toroidal_accepts() {
    for (row, column) in [(-1, 0), (0, -1), (6, 0), (0, 6), (100, -100)] {
        let mut bounded = standard_game();
        bounded.select_token(0).expect("Valid selection");
        assert_eq!(
            bounded.place_token(row, column),
            Err(QuartoError::OutOfRange { row, column })
        );

        let mut toroidal = torus_game();
        toroidal.select_token(0).expect("Valid selection");
        assert_eq!(toroidal.place_token(row, column), Ok(PlaceOutcome::Continue));
    }
}

#[test]
fn test_toroidal_occupancy_after_wrapping() {
    let mut game = torus_game();
    play(&mut game, &[(0, 1, 1)]);
    game.select_token(1).expect("Valid selection");
    assert_eq!(
        game.place_token(7, -5),
        Err(QuartoError::FieldOccupied { row: 1, column: 1 })
    );
}

#[test]
fn test_reset_after_failed_place_restores_pool() {
    let mut game = standard_game();
    play(&mut game, &[(3, 0, 0)]);
    let pool_before = game.board().available_tokens();

    game.select_token(9).expect("Valid selection");
    assert!(game.place_token(0, 0).is_err());
    game.reset_move();

    assert_eq!(game.board().available_tokens(), pool_before);
    assert!(game.board().selected().is_none());
    assert_eq!(game.move_count(), 1);
    assert!(GameInvariants::check_all(&game).is_ok());
}

#[test]
fn test_reset_is_idempotent() {
    let mut game = standard_game();
    game.select_token(2).expect("Valid selection");
    game.reset_move();
    let after_first = game.clone();
    game.reset_move();
    assert_eq!(game, after_first);
    game.select_token(2).expect("Token reselectable after reset");
}

#[test]
fn test_roles_alternate_over_many_moves() {
    let mut game = standard_game();
    let moves: Vec<(TokenId, i64, i64)> = vec![(0, 0, 0), (15, 0, 1), (3, 5, 5), (12, 5, 4)];
    for (index, &(id, row, column)) in moves.iter().enumerate() {
        let placer = game.placing_player().map(|p| p.number());
        assert_eq!(placer, Some(if index % 2 == 0 { 2 } else { 1 }));
        game.select_token(id).expect("Valid selection");
        game.place_token(row, column).expect("Valid placement");
    }
    assert_eq!(game.move_count(), 4);
}

#[test]
fn test_each_token_in_exactly_one_place() {
    let mut game = torus_game();
    play(&mut game, &[(0, 0, 0), (15, 3, 3), (6, -2, 8)]);
    game.select_token(9).expect("Valid selection");

    let board = game.board();
    let mut ids: Vec<TokenId> = board.available_tokens();
    ids.extend(board.selected().map(|t| t.id()));
    ids.extend(board.placed().map(|t| t.id()));
    ids.sort_unstable();
    assert_eq!(ids, (0..16).collect::<Vec<_>>());
}

#[test]
fn test_status_serializes() {
    let json = serde_json::to_string(&GameStatus::Won).expect("Serializable");
    assert_eq!(json, "\"Won\"");
    let outcome = PlaceOutcome::Won {
        winner: Some(2),
        moves: 4,
    };
    let json = serde_json::to_string(&outcome).expect("Serializable");
    assert_eq!(json, r#"{"Won":{"winner":2,"moves":4}}"#);
}
