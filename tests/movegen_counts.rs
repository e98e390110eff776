use duel_chess::chess::movegen::pseudo_legal_moves;
use duel_chess::{Board, Color, Game, Move, Piece, PieceKind, Square};

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

#[test]
fn lone_rook_in_corner_has_fourteen_moves() {
    for corner in ["a1", "h1", "a8", "h8"] {
        let game = Game::from_position(
            board_with(&[(corner, Color::Light, PieceKind::Rook)]),
            Color::Light,
        );
        assert_eq!(game.legal_moves(sq(corner)).unwrap().len(), 14, "{corner}");
    }
}

#[test]
fn friendly_piece_shortens_the_ray() {
    let game = Game::from_position(
        board_with(&[
            ("a1", Color::Light, PieceKind::Rook),
            ("a3", Color::Light, PieceKind::Knight),
        ]),
        Color::Light,
    );
    let moves = game.legal_moves(sq("a1")).unwrap();
    assert_eq!(moves.len(), 8);
    assert!(moves.contains(&Move::new(sq("a1"), sq("a2"))));
    assert!(!moves.contains(&Move::new(sq("a1"), sq("a3"))));
    assert!(!moves.contains(&Move::new(sq("a1"), sq("a4"))));
}

#[test]
fn pawn_on_start_rank_pushes_one_or_two() {
    let light = board_with(&[("d2", Color::Light, PieceKind::Pawn)]);
    assert_eq!(pseudo_legal_moves(&light, sq("d2")).unwrap().len(), 2);

    let dark = board_with(&[("d7", Color::Dark, PieceKind::Pawn)]);
    let mut targets: Vec<Square> = pseudo_legal_moves(&dark, sq("d7"))
        .unwrap()
        .into_iter()
        .map(|m| m.to)
        .collect();
    targets.sort();
    assert_eq!(targets, vec![sq("d5"), sq("d6")]);
}

#[test]
fn blocked_pawn_has_no_forward_moves() {
    for blocker in [Color::Light, Color::Dark] {
        for second in [None, Some(Color::Light), Some(Color::Dark)] {
            let mut board = board_with(&[
                ("d2", Color::Light, PieceKind::Pawn),
                ("d3", blocker, PieceKind::Bishop),
            ]);
            if let Some(c) = second {
                board.place(sq("d4"), Some(Piece::new(c, PieceKind::Rook))).unwrap();
            }
            assert!(pseudo_legal_moves(&board, sq("d2")).unwrap().is_empty());
        }
    }
}

#[test]
fn promotion_yields_exactly_four_moves_per_destination() {
    let game = Game::from_position(
        board_with(&[
            ("e1", Color::Light, PieceKind::King),
            ("c7", Color::Light, PieceKind::Pawn),
            ("d8", Color::Dark, PieceKind::Rook),
            ("h5", Color::Dark, PieceKind::King),
        ]),
        Color::Light,
    );
    let moves = game.legal_moves(sq("c7")).unwrap();
    assert_eq!(moves.len(), 8);
    for dest in ["c8", "d8"] {
        let to_dest: Vec<&Move> = moves.iter().filter(|m| m.to == sq(dest)).collect();
        assert_eq!(to_dest.len(), 4);
        assert!(to_dest.iter().all(|m| m.promotion.is_some()));
        for kind in PieceKind::PROMOTIONS {
            assert!(moves.contains(&Move::promoting(sq("c7"), sq(dest), kind)));
        }
    }
    assert!(!moves.contains(&Move::new(sq("c7"), sq("c8"))));
}

#[test]
fn no_diagonal_move_onto_empty_square() {
    // a dark pawn just double-stepped beside it; there is no en passant
    let board = board_with(&[
        ("e5", Color::Light, PieceKind::Pawn),
        ("d5", Color::Dark, PieceKind::Pawn),
    ]);
    let moves = pseudo_legal_moves(&board, sq("e5")).unwrap();
    assert_eq!(moves, vec![Move::new(sq("e5"), sq("e6"))]);
}

#[test]
fn legal_moves_ignore_whose_turn_it_is() {
    let game = Game::new();
    assert_eq!(game.turn(), Color::Light);
    assert_eq!(game.legal_moves(sq("g8")).unwrap().len(), 2);
    assert_eq!(game.legal_moves(sq("b7")).unwrap().len(), 2);
    assert!(game.legal_moves(sq("a8")).unwrap().is_empty());
}
