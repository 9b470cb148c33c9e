//! Attack sets of individual pieces and attack queries

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::geometry;
use crate::types::{Color, Coord, Piece};

fn step(coord: Coord, deltas: &[(isize, isize)]) -> Bitboard {
    deltas
        .iter()
        .filter_map(|&(df, dr)| coord.try_shift(df, dr))
        .collect()
}

/// Walks each ray until it leaves the board or hits an occupied square, which is included
fn slide(coord: Coord, occupied: Bitboard, deltas: &[(isize, isize)]) -> Bitboard {
    let mut res = Bitboard::EMPTY;
    for &(df, dr) in deltas {
        let mut cur = coord;
        while let Some(next) = cur.try_shift(df, dr) {
            res.set(next);
            if occupied.has(next) {
                break;
            }
            cur = next;
        }
    }
    res
}

#[inline]
pub fn king(coord: Coord) -> Bitboard {
    step(coord, &geometry::KING_DELTAS)
}

#[inline]
pub fn knight(coord: Coord) -> Bitboard {
    step(coord, &geometry::KNIGHT_DELTAS)
}

/// Squares a pawn of color `color` on `coord` captures onto
///
/// Forward moves are not attacks, so they are not included.
#[inline]
pub fn pawn(color: Color, coord: Coord) -> Bitboard {
    let fwd = geometry::pawn_forward_delta(color);
    step(coord, &[(-1, fwd), (1, fwd)])
}

#[inline]
pub fn rook(coord: Coord, occupied: Bitboard) -> Bitboard {
    slide(coord, occupied, &geometry::LINE_DELTAS)
}

#[inline]
pub fn bishop(coord: Coord, occupied: Bitboard) -> Bitboard {
    slide(coord, occupied, &geometry::DIAG_DELTAS)
}

#[inline]
pub fn queen(coord: Coord, occupied: Bitboard) -> Bitboard {
    rook(coord, occupied) | bishop(coord, occupied)
}

/// Returns the squares attacked by the piece standing on `coord`
///
/// Squares occupied by pieces of the same color are never attacked. A slider stops at the first
/// occupied square and includes it only if it holds an opponent piece. Returns an empty set if
/// `coord` is empty.
pub fn attacks(b: &Board, coord: Coord) -> Bitboard {
    let cell = b.get(coord);
    let (color, piece) = match (cell.color(), cell.piece()) {
        (Some(color), Some(piece)) => (color, piece),
        _ => return Bitboard::EMPTY,
    };
    let res = match piece {
        Piece::Pawn => pawn(color, coord),
        Piece::King => king(coord),
        Piece::Knight => knight(coord),
        Piece::Bishop => bishop(coord, b.all()),
        Piece::Rook => rook(coord, b.all()),
        Piece::Queen => queen(coord, b.all()),
    };
    res & !b.color(color)
}

/// Returns `true` if any piece of color `by` attacks `coord`
pub fn is_cell_attacked(b: &Board, coord: Coord, by: Color) -> bool {
    b.color(by).into_iter().any(|p| attacks(b, p).has(coord))
}
