//! Precomputed board geometry, built once on first use.
//!
//! Sliding scans are bounded by `EDGE_DISTANCE` instead of per-step
//! bounds checks; knight and king destinations are filtered against the
//! 8x8 bounds at construction time.

use once_cell::sync::Lazy;

/// Square-index offsets for the eight ray directions, orthogonals first:
/// +8, -1, -8, +1, then the four diagonals.
pub(crate) const DIRECTIONS: [isize; 8] = [8, -1, -8, 1, 7, -9, -7, 9];

/// Direction indices. Rank index grows from black's back rank toward
/// white's, so "forward" is `DIR_RANK_UP` for black and `DIR_RANK_DOWN`
/// for white.
pub(crate) const DIR_RANK_UP: usize = 0;
pub(crate) const DIR_FILE_DOWN: usize = 1;
pub(crate) const DIR_RANK_DOWN: usize = 2;
pub(crate) const DIR_FILE_UP: usize = 3;

/// `(rank delta, file delta)` per direction, matching `DIRECTIONS`.
const DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 1),
];

/// Number of squares between each square and the board edge, per
/// direction.
pub(crate) static EDGE_DISTANCE: Lazy<[[usize; 8]; 64]> = Lazy::new(|| {
    let mut table = [[0usize; 8]; 64];
    for (sq, distances) in table.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        for (d, &(dr, df)) in DELTAS.iter().enumerate() {
            let mut steps = 0;
            let mut nr = r + dr;
            let mut nf = f + df;
            while (0..8).contains(&nr) && (0..8).contains(&nf) {
                steps += 1;
                nr += dr;
                nf += df;
            }
            distances[d] = steps;
        }
    }
    table
});

/// In-bounds knight destinations per square.
pub(crate) static KNIGHT_MOVES: Lazy<[Vec<usize>; 64]> = Lazy::new(|| {
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    destination_table(&deltas)
});

/// In-bounds king destinations per square (castling targets excluded).
pub(crate) static KING_MOVES: Lazy<[Vec<usize>; 64]> = Lazy::new(|| {
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    destination_table(&deltas)
});

fn destination_table(deltas: &[(isize, isize)]) -> [Vec<usize>; 64] {
    std::array::from_fn(|sq| {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut moves = Vec::new();
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                moves.push((nr * 8 + nf) as usize);
            }
        }
        moves
    })
}
