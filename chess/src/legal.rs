//! Self-check filtering and mate detection

use crate::attack;
use crate::board::Board;
use crate::movegen;
use crate::moves;
use crate::types::{Color, Coord};

/// Returns `true` if the king of color `c` is attacked by the opponent
#[inline]
pub fn is_king_attacked(b: &Board, c: Color) -> bool {
    attack::is_cell_attacked(b, b.king_pos(c), c.inv())
}

/// Returns `true` if moving the piece of color `c` from `src` to `dst` leaves its king attacked
///
/// The move is tried on a scratch copy, so the board itself is never changed. This also covers
/// en passant captures that uncover a line to the king.
pub fn would_expose_own_king(b: &Board, src: Coord, dst: Coord, c: Color) -> bool {
    let mut scratch = b.clone();
    moves::make_move_unchecked(&mut scratch, src, dst);
    is_king_attacked(&scratch, c)
}

pub fn is_checkmate(b: &Board, c: Color) -> bool {
    is_king_attacked(b, c) && !movegen::has_legal_moves(b, c)
}

pub fn is_stalemate(b: &Board, c: Color) -> bool {
    !is_king_attacked(b, c) && !movegen::has_legal_moves(b, c)
}
