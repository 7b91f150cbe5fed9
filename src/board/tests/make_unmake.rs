//! Make/unmake move tests.

use rand::prelude::*;

use super::legal_moves_for;
use crate::board::{Board, Color, Move, Piece, PieceKind};

fn find_move(board: &mut Board, from: usize, to: usize) -> Move {
    for m in board.generate_legal_moves(from).iter() {
        if m.from == from && m.to == to {
            return *m;
        }
    }
    panic!("Expected move {from}->{to} not found");
}

#[test]
fn quiet_move_round_trip() {
    let mut board = Board::new();
    let before = *board.squares();

    let mv = find_move(&mut board, 52, 36); // e2e4
    board.make_move(mv, false);
    assert_ne!(*board.squares(), before);
    assert!(board.piece_at(36).has_moved());

    board.unmake_move(false);
    assert_eq!(*board.squares(), before);
    assert!(!board.piece_at(52).has_moved());
}

#[test]
fn capture_round_trip_restores_victim() {
    let mut board = Board::empty();
    board.set_piece(56, Piece::new(PieceKind::Rook, Color::White));
    board.set_piece(8, Piece::new(PieceKind::Pawn, Color::Black));
    let before = *board.squares();

    let mv = find_move(&mut board, 56, 8);
    board.make_move(mv, true);
    assert_eq!(board.piece_at(8).kind(), PieceKind::Rook);
    assert!(board.piece_at(56).is_none());

    board.unmake_move(true);
    assert_eq!(*board.squares(), before);
}

#[test]
fn promotion_replaces_pawn_with_queen() {
    let mut board = Board::empty();
    board.set_piece(12, Piece::new(PieceKind::Pawn, Color::White).marked_moved());
    let before = *board.squares();

    let mv = find_move(&mut board, 12, 4);
    assert!(mv.promotes);
    board.make_move(mv, true);

    let promoted = board.piece_at(4);
    assert_eq!(promoted.kind(), PieceKind::Queen);
    assert_eq!(promoted.color(), Some(Color::White));
    assert!(promoted.has_moved());
    assert!(board.piece_at(12).is_none());

    board.unmake_move(true);
    assert_eq!(*board.squares(), before);
}

#[test]
fn capture_promotion_round_trip() {
    let mut board = Board::empty();
    board.set_piece(12, Piece::new(PieceKind::Pawn, Color::White).marked_moved());
    board.set_piece(3, Piece::new(PieceKind::Rook, Color::Black));
    let before = *board.squares();

    let mv = find_move(&mut board, 12, 3);
    assert!(mv.promotes);
    board.make_move(mv, true);
    assert_eq!(board.piece_at(3).kind(), PieceKind::Queen);

    board.unmake_move(true);
    assert_eq!(*board.squares(), before);
}

#[test]
fn castling_relocates_rook_and_back() {
    let mut board = Board::empty();
    board.set_piece(60, Piece::new(PieceKind::King, Color::White));
    board.set_piece(56, Piece::new(PieceKind::Rook, Color::White));
    board.set_piece(63, Piece::new(PieceKind::Rook, Color::White));
    board.set_piece(4, Piece::new(PieceKind::King, Color::Black));
    let before = *board.squares();

    // Kingside: king to g1, rook h1 to f1.
    let mv = find_move(&mut board, 60, 62);
    assert!(mv.castles);
    board.make_move(mv, true);

    assert_eq!(board.piece_at(62).kind(), PieceKind::King);
    assert!(board.piece_at(62).has_moved());
    assert_eq!(board.piece_at(61).kind(), PieceKind::Rook);
    // The relocated rook keeps an unset moved flag; the king's own flag
    // already rules out another castle.
    assert!(!board.piece_at(61).has_moved());
    assert!(board.piece_at(60).is_none());
    assert!(board.piece_at(63).is_none());

    board.unmake_move(true);
    assert_eq!(*board.squares(), before);

    // Queenside: king to c1, rook a1 to d1.
    let mv = find_move(&mut board, 60, 58);
    assert!(mv.castles);
    board.make_move(mv, true);
    assert_eq!(board.piece_at(58).kind(), PieceKind::King);
    assert_eq!(board.piece_at(59).kind(), PieceKind::Rook);
    assert!(board.piece_at(56).is_none());

    board.unmake_move(true);
    assert_eq!(*board.squares(), before);
}

#[test]
fn undo_on_empty_history_is_noop() {
    let mut board = Board::new();
    let before = *board.squares();

    board.unmake_move(false);

    assert_eq!(*board.squares(), before);
    assert_eq!(board.last_move(), None);
    assert_eq!(board.history_len(), 0);
}

#[test]
fn undo_exposes_the_undone_move() {
    let mut board = Board::new();

    let first = find_move(&mut board, 52, 36); // e2e4
    board.make_move(first, false);
    let second = find_move(&mut board, 12, 28); // e7e5
    board.make_move(second, false);

    assert_eq!(board.last_move().map(|m| (m.from, m.to)), Some((12, 28)));

    // After a real undo the record shows the move just taken back, not
    // the move now on top of the history.
    board.unmake_move(false);
    assert_eq!(board.last_move().map(|m| (m.from, m.to)), Some((12, 28)));

    board.unmake_move(false);
    assert_eq!(board.last_move().map(|m| (m.from, m.to)), Some((52, 36)));
}

#[test]
fn speculative_moves_leave_last_move_alone() {
    let mut board = Board::new();

    let mv = find_move(&mut board, 52, 36);
    board.make_move(mv, true);
    assert_eq!(board.last_move(), None);
    board.unmake_move(true);
    assert_eq!(board.last_move(), None);

    let real = find_move(&mut board, 52, 44);
    board.make_move(real, false);
    let spec = find_move(&mut board, 12, 28);
    board.make_move(spec, true);
    assert_eq!(board.last_move().map(|m| (m.from, m.to)), Some((52, 44)));
    board.unmake_move(true);
    assert_eq!(board.last_move().map(|m| (m.from, m.to)), Some((52, 44)));
}

#[test]
fn random_playout_round_trips_exactly() {
    let mut board = Board::new();
    let before = *board.squares();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    let mut applied = 0;
    let mut color = Color::White;
    for _ in 0..60 {
        let moves = legal_moves_for(&mut board, color);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(mv, false);
        applied += 1;
        color = color.opponent();
    }
    assert!(applied > 0);
    assert_eq!(board.history_len(), applied);

    for _ in 0..applied {
        board.unmake_move(false);
    }

    assert_eq!(*board.squares(), before);
    assert_eq!(board.history_len(), 0);
}
