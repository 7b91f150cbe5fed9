//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Apply/undo correctness and history semantics
//! - `movegen.rs` - Pseudo-legal generation, castling, check detection
//! - `eval.rs` - Static evaluation properties
//! - `search.rs` - Minimax, pruning equivalence, terminal positions
//! - `proptest.rs` - Property-based tests

mod make_unmake;

use super::{Board, Color, Move};

/// Every legal move for one side, scanning square by square.
pub(crate) fn legal_moves_for(board: &mut Board, color: Color) -> Vec<Move> {
    let mut all = Vec::new();
    for sq in 0..64 {
        if board.piece_at(sq).is_color(color) {
            all.extend(board.generate_legal_moves(sq).iter().copied());
        }
    }
    all
}
