//! Turn management for a human-versus-engine game.
//!
//! This is the orchestration a presentation layer talks to: it tracks
//! whose turn it is, turns a (source, target) gesture into a legal move,
//! supports taking a full move back, and runs the engine's reply,
//! either inline or on a background thread that hands the chosen move
//! back over a one-shot channel. The board stays exclusively owned; the
//! background search works on a clone, so no state is shared and no
//! cancellation exists. A started search runs to its configured depth.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::debug;

use crate::board::{find_best_move, Board, Color, Move, MoveList};

/// Search depth used when none is configured.
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// A game between a white human and the black engine.
pub struct Game {
    board: Board,
    depth: u32,
    engine_color: Color,
    turn: Color,
    over: bool,
}

impl Game {
    /// A fresh game at the starting position; white (the player) moves
    /// first and the engine answers as black.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Game {
            board: Board::new(),
            depth,
            engine_color: Color::Black,
            turn: Color::White,
            over: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    /// True once a side to move had no legal reply (checkmate or
    /// stalemate; the core does not distinguish them).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Legal moves for the piece on `square`. Empty when the square is
    /// out of bounds, empty, or holds a piece of the side not to move.
    #[must_use]
    pub fn legal_moves(&mut self, square: usize) -> MoveList {
        if square >= 64 || !self.board.piece_at(square).is_color(self.turn) {
            return MoveList::new();
        }
        self.board.generate_legal_moves(square)
    }

    /// Play `from` → `to` for the side to move if that gesture matches a
    /// legal move. Returns the applied move.
    pub fn try_move(&mut self, from: usize, to: usize) -> Option<Move> {
        let legal = self.legal_moves(from);

        for mv in legal.iter() {
            if mv.to == to {
                self.board.make_move(*mv, false);
                self.turn = self.turn.opponent();
                return Some(*mv);
            }
        }
        None
    }

    /// Take back the last full move: both the engine's reply and the
    /// player's move before it. No-ops past the start of the game.
    pub fn take_back(&mut self) {
        self.board.unmake_move(false);
        self.board.unmake_move(false);
    }

    /// Search and play the engine's reply on the calling thread.
    /// Returns the move played, or `None` once the engine has no legal
    /// move, at which point the game is over.
    pub fn engine_turn(&mut self) -> Option<Move> {
        match find_best_move(&mut self.board, self.engine_color, self.depth) {
            Some(mv) => {
                self.board.make_move(mv, false);
                self.turn = self.engine_color.opponent();
                Some(mv)
            }
            None => {
                debug!("{} has no legal reply; game over", self.engine_color);
                self.over = true;
                None
            }
        }
    }

    /// Run the engine's search on a background thread against a clone
    /// of the current position. The chosen move (or `None` for game
    /// over) arrives on the returned channel once the search completes;
    /// apply it with [`Game::apply_engine_move`]. There are no partial
    /// results and no way to stop the search early.
    #[must_use]
    pub fn spawn_search(&self) -> Receiver<Option<Move>> {
        let mut board = self.board.clone();
        let color = self.engine_color;
        let depth = self.depth;
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let best = find_best_move(&mut board, color, depth);
            // The receiver may have been dropped; nothing to do then.
            let _ = tx.send(best);
        });

        rx
    }

    /// Apply a move delivered by [`Game::spawn_search`], or record the
    /// game as over when the search found none.
    pub fn apply_engine_move(&mut self, mv: Option<Move>) {
        match mv {
            Some(mv) => {
                self.board.make_move(mv, false);
                self.turn = self.engine_color.opponent();
            }
            None => self.over = true,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(DEFAULT_SEARCH_DEPTH)
    }
}
