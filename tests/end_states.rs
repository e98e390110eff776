use duel_chess::{Board, ChessError, Color, Game, GameStatus, Move, Piece, PieceKind, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board_with(pieces: &[(&str, Color, PieceKind)]) -> Board {
    let mut board = Board::new();
    for &(at, color, kind) in pieces {
        board.place(sq(at), Some(Piece::new(color, kind))).unwrap();
    }
    board
}

fn back_rank_mate() -> Board {
    board_with(&[
        ("h8", Color::Dark, PieceKind::King),
        ("g7", Color::Dark, PieceKind::Pawn),
        ("h7", Color::Dark, PieceKind::Pawn),
        ("a8", Color::Light, PieceKind::Rook),
        ("c1", Color::Light, PieceKind::King),
    ])
}

fn corner_stalemate() -> Board {
    board_with(&[
        ("a8", Color::Dark, PieceKind::King),
        ("b6", Color::Light, PieceKind::Queen),
        ("c1", Color::Light, PieceKind::King),
    ])
}

#[test]
fn back_rank_mate_is_detected() {
    let game = Game::from_position(back_rank_mate(), Color::Dark);
    assert!(game.is_in_check(Color::Dark));
    assert!(game.is_in_checkmate(Color::Dark));
    assert!(!game.is_in_stalemate(Color::Dark));
    assert!(!game.is_in_checkmate(Color::Light));
    assert_eq!(game.status(), GameStatus::Checkmate(Color::Dark));
}

#[test]
fn removing_the_attacker_lifts_the_mate() {
    let mut board = back_rank_mate();
    board.place(sq("a8"), None).unwrap();
    let game = Game::from_position(board, Color::Dark);
    assert!(!game.is_in_check(Color::Dark));
    assert!(!game.is_in_checkmate(Color::Dark));
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn a_capturable_attacker_is_not_mate() {
    let mut board = back_rank_mate();
    board
        .place(sq("a1"), Some(Piece::new(Color::Dark, PieceKind::Rook)))
        .unwrap();
    let game = Game::from_position(board, Color::Dark);
    assert!(game.is_in_check(Color::Dark));
    assert!(!game.is_in_checkmate(Color::Dark));
    let escapes = game.all_legal_moves(Color::Dark);
    assert_eq!(escapes, vec![Move::new(sq("a1"), sq("a8"))]);
}

#[test]
fn king_with_no_moves_and_no_check_is_stalemate() {
    let game = Game::from_position(corner_stalemate(), Color::Dark);
    assert!(!game.is_in_check(Color::Dark));
    assert!(game.is_in_stalemate(Color::Dark));
    assert!(!game.is_in_checkmate(Color::Dark));
    assert!(!game.is_in_stalemate(Color::Light));
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn one_pawn_move_breaks_the_stalemate() {
    let mut board = corner_stalemate();
    board
        .place(sq("h6"), Some(Piece::new(Color::Dark, PieceKind::Pawn)))
        .unwrap();
    let game = Game::from_position(board, Color::Dark);
    assert!(!game.is_in_stalemate(Color::Dark));
    assert_eq!(game.all_legal_moves(Color::Dark), vec![Move::new(sq("h6"), sq("h5"))]);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn stalemated_game_refuses_moves() {
    let mut game = Game::from_position(corner_stalemate(), Color::Dark);
    let before = game.clone();
    assert_eq!(
        game.apply_move(Move::new(sq("a8"), sq("a7"))),
        Err(ChessError::GameOver(GameStatus::Stalemate))
    );
    assert_eq!(game, before);
}

#[test]
fn reaching_stalemate_through_play() {
    let board = board_with(&[
        ("a8", Color::Dark, PieceKind::King),
        ("b5", Color::Light, PieceKind::Queen),
        ("c1", Color::Light, PieceKind::King),
    ]);
    let mut game = Game::from_position(board, Color::Light);
    assert_eq!(game.status(), GameStatus::InProgress);
    game.apply_move(Move::new(sq("b5"), sq("b6"))).unwrap();
    assert_eq!(game.turn(), Color::Dark);
    assert_eq!(game.status(), GameStatus::Stalemate);
}
