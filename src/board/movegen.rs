//! Pseudo-legal and legal move generation, plus check detection.

use super::move_tables::{
    DIRECTIONS, DIR_FILE_DOWN, DIR_FILE_UP, DIR_RANK_DOWN, DIR_RANK_UP, EDGE_DISTANCE, KING_MOVES,
    KNIGHT_MOVES,
};
use super::piece::{Color, PieceKind};
use super::state::Board;
use super::types::{Move, MoveList};

impl Board {
    /// Walk each applicable ray up to the precomputed edge distance,
    /// stopping at the first occupied square (capturing it when it
    /// belongs to the opponent).
    fn generate_sliding_moves(&self, from: usize, moves: &mut MoveList) {
        let piece = self.squares[from];

        let (start, end) = match piece.kind() {
            PieceKind::Rook => (0, 4),
            PieceKind::Bishop => (4, 8),
            _ => (0, 8), // queen
        };

        for d in start..end {
            for i in 0..EDGE_DISTANCE[from][d] {
                let to = (from as isize + (i as isize + 1) * DIRECTIONS[d]) as usize;
                let target = self.squares[to];

                if target.is_none() {
                    moves.push(Move::new(from, to));
                } else if target.color() == piece.color() {
                    break;
                } else {
                    moves.push(Move::new(from, to));
                    break;
                }
            }
        }
    }

    fn generate_pawn_moves(&self, from: usize, moves: &mut MoveList) {
        let piece = self.squares[from];
        let Some(color) = piece.color() else {
            return;
        };

        // Black advances toward higher rank indices, white toward lower.
        let forward = match color {
            Color::Black => DIR_RANK_UP,
            Color::White => DIR_RANK_DOWN,
        };
        if EDGE_DISTANCE[from][forward] == 0 {
            return;
        }
        let step = DIRECTIONS[forward];
        let promoting = EDGE_DISTANCE[from][forward] == 1;

        let ahead = (from as isize + step) as usize;
        if self.squares[ahead].is_none() {
            let mut mv = Move::new(from, ahead);
            mv.promotes = promoting;
            moves.push(mv);

            if !piece.has_moved() && EDGE_DISTANCE[from][forward] > 1 {
                let double = (ahead as isize + step) as usize;
                if self.squares[double].is_none() {
                    moves.push(Move::new(from, double));
                }
            }
        }

        for side in [DIR_FILE_DOWN, DIR_FILE_UP] {
            if EDGE_DISTANCE[from][side] == 0 {
                continue;
            }
            let to = (ahead as isize + DIRECTIONS[side]) as usize;
            let target = self.squares[to];
            if !target.is_none() && target.color() != piece.color() {
                let mut mv = Move::new(from, to);
                mv.promotes = promoting;
                moves.push(mv);
            }
        }
    }

    fn generate_knight_moves(&self, from: usize, moves: &mut MoveList) {
        let piece = self.squares[from];

        for &to in &KNIGHT_MOVES[from] {
            let target = self.squares[to];
            if target.is_none() || target.color() != piece.color() {
                moves.push(Move::new(from, to));
            }
        }
    }

    /// One-step king moves plus castling candidates.
    ///
    /// Castling checks occupancy and move history only: the king must
    /// not have moved, the squares between king and rook must be empty,
    /// and the wing's rook must be an unmoved rook. Whether the king
    /// starts in, passes through, or lands on an attacked square is not
    /// examined here; a checked landing square is caught by the generic
    /// legality filter.
    fn generate_king_moves(&self, from: usize, moves: &mut MoveList) {
        let piece = self.squares[from];

        for &to in &KING_MOVES[from] {
            let target = self.squares[to];
            if target.is_none() || target.color() != piece.color() {
                moves.push(Move::new(from, to));
            }
        }

        if piece.has_moved() {
            return;
        }

        // Queenside: three empty squares toward the a-side rook.
        if EDGE_DISTANCE[from][DIR_FILE_DOWN] >= 4
            && (1..=3).all(|i| self.squares[from - i].is_none())
        {
            let rook = self.squares[from - 4];
            if rook.is_kind(PieceKind::Rook) && !rook.has_moved() {
                moves.push(Move::castle(from, from - 2, from - 4, from - 1));
            }
        }

        // Kingside: two empty squares toward the h-side rook.
        if EDGE_DISTANCE[from][DIR_FILE_UP] >= 3
            && (1..=2).all(|i| self.squares[from + i].is_none())
        {
            let rook = self.squares[from + 3];
            if rook.is_kind(PieceKind::Rook) && !rook.has_moved() {
                moves.push(Move::castle(from, from + 2, from + 3, from + 1));
            }
        }
    }

    fn generate_into(&self, from: usize, moves: &mut MoveList) {
        match self.squares[from].kind() {
            PieceKind::Pawn => self.generate_pawn_moves(from, moves),
            PieceKind::Knight => self.generate_knight_moves(from, moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.generate_sliding_moves(from, moves);
            }
            PieceKind::King => self.generate_king_moves(from, moves),
            PieceKind::None => {}
        }
    }

    /// Pseudo-legal moves for the piece on `from`; empty when the
    /// square is empty.
    #[must_use]
    pub fn generate_piece_moves(&self, from: usize) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_into(from, &mut moves);
        moves
    }

    /// All pseudo-legal moves for one side.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for from in 0..64 {
            if self.squares[from].is_color(color) {
                self.generate_into(from, &mut moves);
            }
        }
        moves
    }

    /// Whether `color`'s king is targeted by any opposing pseudo-legal
    /// move. Deliberately built on the pseudo-legal generator: routing
    /// through the legality filter would recurse without end.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        let enemy_moves = self.generate_moves(color.opponent());

        for mv in enemy_moves.iter() {
            let target = self.squares[mv.to];
            if target.is_kind(PieceKind::King) && target.is_color(color) {
                return true;
            }
        }
        false
    }

    /// Legal moves for the piece on `from`: the pseudo-legal candidates
    /// that do not leave the mover's king in check.
    #[must_use]
    pub fn generate_legal_moves(&mut self, from: usize) -> MoveList {
        let pseudo = self.generate_piece_moves(from);
        let mut legal = MoveList::new();

        let Some(color) = self.squares[from].color() else {
            return legal;
        };

        for mv in pseudo.iter() {
            self.make_move(*mv, true);
            if !self.in_check(color) {
                legal.push(*mv);
            }
            self.unmake_move(true);
        }
        legal
    }
}
