//! Two-player chess engine core: board state, move generation, and a
//! minimax opponent, plus a thin game layer that tracks turns and runs
//! the search off-thread.

pub mod board;
pub mod game;

pub use board::{evaluate, find_best_move, Board, Color, Move, MoveList, Piece, PieceKind};
pub use game::{Game, DEFAULT_SEARCH_DEPTH};
