use classical_search::{games::TicTacToe, GameState, SearchError, Side};

const X: Option<Side> = Some(Side::Plus);
const O: Option<Side> = Some(Side::Minus);
const E: Option<Side> = None;

#[test]
fn test_new_board() {
    let game = TicTacToe::new();

    assert_eq!(game.turn(), Side::Plus);
    assert_eq!(game.legal_moves(), (0..9).collect::<Vec<_>>());
    assert!(!game.is_terminal());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_apply_move_returns_new_state() {
    let game = TicTacToe::new();
    let next = game.apply_move(&4).unwrap();

    // The original is untouched
    assert_eq!(game, TicTacToe::new());
    assert_eq!(next.cell(4), Some(Side::Plus));
    assert_eq!(next.turn(), Side::Minus);
    assert!(!next.legal_moves().contains(&4));
    assert_eq!(next.moves_played(), 1);
}

#[test]
fn test_illegal_moves_are_rejected() {
    let game = TicTacToe::new().apply_move(&4).unwrap();

    assert!(matches!(game.apply_move(&4), Err(SearchError::IllegalMove(_))));
    assert!(matches!(game.apply_move(&9), Err(SearchError::IllegalMove(_))));

    let message = game.apply_move(&4).unwrap_err().to_string();
    assert!(message.contains("Illegal move"), "{}", message);
}

#[test]
fn test_winner_detection() {
    let row = TicTacToe::with_board([O, O, O, X, X, E, X, E, E], Side::Plus);
    assert_eq!(row.winner(), Some(Side::Minus));

    let column = TicTacToe::with_board([X, O, E, X, O, E, X, E, E], Side::Minus);
    assert_eq!(column.winner(), Some(Side::Plus));

    let diagonal = TicTacToe::with_board([E, O, X, O, X, E, X, E, E], Side::Minus);
    assert_eq!(diagonal.winner(), Some(Side::Plus));
}

#[test]
fn test_won_game_has_no_moves() {
    let won = TicTacToe::with_board([X, X, X, O, O, E, E, E, E], Side::Minus);

    assert!(won.is_terminal());
    assert!(won.legal_moves().is_empty());
    assert!(matches!(won.apply_move(&5), Err(SearchError::IllegalMove(_))));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let drawn = TicTacToe::with_board([X, O, X, X, O, O, O, X, X], Side::Minus);

    assert!(drawn.is_terminal());
    assert_eq!(drawn.winner(), None);
    assert!(drawn.legal_moves().is_empty());
}

#[test]
fn test_display() {
    let game = TicTacToe::with_board([X, E, E, E, O, E, E, E, X], Side::Minus);
    assert_eq!(game.to_string(), "X . .\n. O .\n. . X\n");
}

#[test]
fn test_side_identity() {
    assert_eq!(Side::Plus.sign(), 1);
    assert_eq!(Side::Minus.sign(), -1);
    assert_eq!(Side::Plus.opponent(), Side::Minus);
    assert!(Side::Plus.is_maximizer());
    assert!(!Side::Minus.is_maximizer());
    assert_eq!(Side::Plus.to_string(), "+1");
    assert_eq!(Side::Minus.to_string(), "-1");
}
