//! Applying and reversing moves.
//!
//! Every apply records the pre-move square contents inside the history
//! entry, so a matching unmake restores the position exactly, moved
//! flags included. Search and legality filtering pass `speculative =
//! true`, which leaves the externally visible last-move record alone.

use super::piece::{Piece, PieceKind};
use super::state::Board;
use super::types::Move;

impl Board {
    /// Apply `mv` to the board and push it onto the history stack.
    pub fn make_move(&mut self, mut mv: Move, speculative: bool) {
        mv.source_piece = self.squares[mv.from];
        mv.target_piece = self.squares[mv.to];

        self.squares[mv.to] = mv.source_piece.marked_moved();
        self.squares[mv.from] = Piece::NONE;

        if mv.promotes {
            self.squares[mv.to] = mv.source_piece.with_kind(PieceKind::Queen).marked_moved();
        } else if mv.castles {
            mv.rook_piece = self.squares[mv.rook_from];

            self.squares[mv.rook_to] = mv.rook_piece;
            self.squares[mv.rook_from] = Piece::NONE;
        }

        self.push_history(mv);

        if !speculative {
            self.set_last_move(mv);
        }
    }

    /// Reverse the most recent move. A no-op when the history is empty.
    ///
    /// A non-speculative undo leaves the last-move record pointing at
    /// the move that was just taken back.
    pub fn unmake_move(&mut self, speculative: bool) {
        let Some(mv) = self.pop_history() else {
            return;
        };

        self.squares[mv.from] = mv.source_piece;
        self.squares[mv.to] = mv.target_piece;

        if mv.castles {
            self.squares[mv.rook_from] = mv.rook_piece;
            self.squares[mv.rook_to] = Piece::NONE;
        }

        if !speculative {
            self.set_last_move(mv);
        }
    }
}
