//! Castling availability

use crate::attack;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::geometry;
use crate::types::{CastlingSide, Cell, Color, Coord, Piece};

use arrayvec::ArrayVec;

/// Squares between the king and the rook, which must be empty to castle
#[inline]
pub const fn pass(c: Color, s: CastlingSide) -> Bitboard {
    let x = match s {
        CastlingSide::King => 0x60,
        CastlingSide::Queen => 0x0e,
    };
    Bitboard::from_raw(match c {
        Color::White => x,
        Color::Black => x << 56,
    })
}

/// Squares the king crosses or lands on, which must not be attacked to castle
///
/// The king's own square is not here, as castling out of check is forbidden separately.
#[inline]
pub const fn transit(c: Color, s: CastlingSide) -> Bitboard {
    let x = match s {
        CastlingSide::King => 0x60,
        CastlingSide::Queen => 0x0c,
    };
    Bitboard::from_raw(match c {
        Color::White => x,
        Color::Black => x << 56,
    })
}

/// Returns the square the king of color `c` lands on when castling to side `s`
#[inline]
pub const fn king_dst(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(geometry::king_dst_file(s), geometry::castling_rank(c))
}

/// Returns `true` if the king of color `c` may castle to side `s` right now
///
/// Self-check is not considered here beyond the attacked squares, so the castling move still goes
/// through the usual legality filter.
pub fn is_available(b: &Board, c: Color, s: CastlingSide) -> bool {
    let king = geometry::king_home(c);
    let rook = geometry::rook_home(c, s);
    if !b.castling().can_castle(c, s)
        || b.get(king) != Cell::from_parts(c, Piece::King)
        || b.get(rook) != Cell::from_parts(c, Piece::Rook)
    {
        return false;
    }
    if (b.all() & pass(c, s)).is_nonempty() {
        return false;
    }
    let enemy = c.inv();
    !attack::is_cell_attacked(b, king, enemy)
        && !transit(c, s)
            .into_iter()
            .any(|p| attack::is_cell_attacked(b, p, enemy))
}

/// Returns the castling destinations of the king of color `c`, queenside first
pub fn destinations(b: &Board, c: Color) -> ArrayVec<Coord, 2> {
    let mut res = ArrayVec::new();
    for s in [CastlingSide::Queen, CastlingSide::King] {
        if is_available(b, c, s) {
            res.push(king_dst(c, s));
        }
    }
    res
}
