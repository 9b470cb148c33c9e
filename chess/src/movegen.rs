//! Move generation

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::moves::{self, Move};
use crate::types::{Color, Coord, Piece};
use crate::{attack, castling, geometry, legal};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// List of destination squares for a single piece
///
/// A piece cannot have more than 27 moves, so the list never overflows.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct SquareList(ArrayVec<Coord, 32>);

impl Deref for SquareList {
    type Target = ArrayVec<Coord, 32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SquareList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for SquareList {
    type Item = Coord;
    type IntoIter = arrayvec::IntoIter<Coord, 32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Coord;
    type IntoIter = slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl SquareList {
    pub fn new() -> SquareList {
        SquareList(ArrayVec::new())
    }
}

#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, 256>);

impl Deref for MoveList {
    type Target = ArrayVec<Move, 256>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut MoveList {
    type Item = &'a mut Move;
    type IntoIter = slice::IterMut<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

fn pawn_candidates(b: &Board, src: Coord, c: Color) -> Bitboard {
    let mut res = Bitboard::EMPTY;
    let fwd = geometry::pawn_forward_delta(c);

    if let Some(single) = src.try_shift(0, fwd).filter(|&p| b.is_empty(p)) {
        res.set(single);
        if src.rank() == geometry::double_move_src_rank(c) {
            if let Some(double) = single.try_shift(0, fwd).filter(|&p| b.is_empty(p)) {
                res.set(double);
            }
        }
    }

    for dst in attack::pawn(c, src) {
        if b.color(c.inv()).has(dst) || moves::is_enpassant_target(b, dst, c) {
            res.set(dst);
        }
    }

    res
}

/// Returns the squares the piece on `src` could move to if its own king's safety is ignored
///
/// Castling is included only when all of its own conditions hold.
pub fn candidates(b: &Board, src: Coord) -> Bitboard {
    let cell = b.get(src);
    let (color, piece) = match (cell.color(), cell.piece()) {
        (Some(color), Some(piece)) => (color, piece),
        _ => return Bitboard::EMPTY,
    };
    match piece {
        Piece::Pawn => pawn_candidates(b, src, color),
        Piece::King => {
            let mut res = attack::attacks(b, src);
            if src == geometry::king_home(color) {
                for dst in castling::destinations(b, color) {
                    res.set(dst);
                }
            }
            res
        }
        _ => attack::attacks(b, src),
    }
}

/// Returns the legal destinations of the piece on `src`, sorted by square index
///
/// Returns an empty list if `src` is empty.
pub fn legal_moves(b: &Board, src: Coord) -> SquareList {
    let mut res = SquareList::new();
    let color = match b.get(src).color() {
        Some(color) => color,
        None => return res,
    };
    for dst in candidates(b, src) {
        if !legal::would_expose_own_king(b, src, dst, color) {
            res.push(dst);
        }
    }
    res
}

/// Returns all the legal moves for color `c`
pub fn gen_all(b: &Board, c: Color) -> MoveList {
    let mut res = MoveList::new();
    for src in b.color(c) {
        for dst in legal_moves(b, src) {
            res.push(Move::new(src, dst));
        }
    }
    res
}

/// Returns `true` if color `c` has at least one legal move
///
/// Stops on the first legal move found, so it is faster than generating all the moves.
pub fn has_legal_moves(b: &Board, c: Color) -> bool {
    b.color(c).into_iter().any(|src| {
        candidates(b, src)
            .into_iter()
            .any(|dst| !legal::would_expose_own_king(b, src, dst, c))
    })
}
