//! Moves and the board mutator

use crate::board::Board;
use crate::types::{CastlingSide, Cell, Color, Coord, Piece};
use crate::geometry;

use std::fmt;

use thiserror::Error;

/// Error applying or completing a move
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// There is no piece on the source square
    #[error("no piece on {0}")]
    EmptySource(Coord),
    /// The move is not among the legal moves of the piece
    #[error("move {0} is not legal")]
    NotLegal(Move),
    /// There is no pawn awaiting promotion on the given square
    #[error("no promotion on {0}")]
    NoPromotion(Coord),
}

/// Piece kind a pawn may be promoted to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PromoteKind {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromoteKind {
    pub const fn piece(&self) -> Piece {
        match *self {
            Self::Knight => Piece::Knight,
            Self::Bishop => Piece::Bishop,
            Self::Rook => Piece::Rook,
            Self::Queen => Piece::Queen,
        }
    }

    pub const fn from_piece(p: Piece) -> Option<Self> {
        match p {
            Piece::Knight => Some(Self::Knight),
            Piece::Bishop => Some(Self::Bishop),
            Piece::Rook => Some(Self::Rook),
            Piece::Queen => Some(Self::Queen),
            Piece::Pawn | Piece::King => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            _ => None,
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Self::Knight, Self::Bishop, Self::Rook, Self::Queen].into_iter()
    }
}

/// Chess move, i.e. a pair of source and destination squares
///
/// Castling is expressed as the king's move (e.g. `e1g1`), and en passant as the pawn's diagonal
/// move onto the empty target square. Promotion is not a part of the move: once the pawn lands on
/// its last rank, the replacement piece is chosen separately (see [`Board::promote()`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    src: Coord,
    dst: Coord,
}

impl Move {
    #[inline]
    pub const fn new(src: Coord, dst: Coord) -> Move {
        Move { src, dst }
    }

    #[inline]
    pub const fn src(&self) -> Coord {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Coord {
        self.dst
    }

    /// Checks that the move is legal on the board `b`
    pub fn validate(&self, b: &Board) -> Result<(), MoveError> {
        if b.is_empty(self.src) {
            return Err(MoveError::EmptySource(self.src));
        }
        if !b.legal_moves(self.src).contains(&self.dst) {
            return Err(MoveError::NotLegal(*self));
        }
        Ok(())
    }

    pub fn is_legal(&self, b: &Board) -> bool {
        self.validate(b).is_ok()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

/// Returns the castling side if moving the piece from `src` to `dst` is castling
///
/// Any king move by two or more files counts as castling.
pub fn castling_side(b: &Board, src: Coord, dst: Coord) -> Option<CastlingSide> {
    if b.get(src).piece() != Some(Piece::King)
        || src.file().index().abs_diff(dst.file().index()) < 2
    {
        return None;
    }
    Some(if dst.file() < src.file() {
        CastlingSide::Queen
    } else {
        CastlingSide::King
    })
}

/// Returns the square skipped over if moving from `src` to `dst` is a pawn's double move
pub fn enpassant_created(b: &Board, src: Coord, dst: Coord) -> Option<Coord> {
    let color = match (b.get(src).color(), b.get(src).piece()) {
        (Some(color), Some(Piece::Pawn)) => color,
        _ => return None,
    };
    let fwd = geometry::pawn_forward_delta(color);
    if src.rank() != geometry::double_move_src_rank(color) || src.try_shift(0, 2 * fwd) != Some(dst)
    {
        return None;
    }
    src.try_shift(0, fwd)
}

/// Returns `true` if a pawn of color `c` may capture en passant onto `dst`
pub fn is_enpassant_target(b: &Board, dst: Coord, c: Color) -> bool {
    b.ep_target() == Some(dst) && dst.rank() == geometry::enpassant_dst_rank(c)
}

/// Returns the square of the pawn taken if moving from `src` to `dst` is an en passant capture
pub fn enpassant_taken(b: &Board, src: Coord, dst: Coord) -> Option<Coord> {
    let color = match (b.get(src).color(), b.get(src).piece()) {
        (Some(color), Some(Piece::Pawn)) => color,
        _ => return None,
    };
    if src.file() == dst.file() || !b.is_empty(dst) || !is_enpassant_target(b, dst, color) {
        return None;
    }
    Some(Coord::from_parts(dst.file(), src.rank()))
}

/// Returns `true` if the piece on `c` is a pawn that has reached its last rank
pub fn promotion_triggered(b: &Board, c: Coord) -> bool {
    let cell = b.get(c);
    match (cell.color(), cell.piece()) {
        (Some(color), Some(Piece::Pawn)) => c.rank() == geometry::promote_dst_rank(color),
        _ => false,
    }
}

/// Applies the move from `src` to `dst` without any checks
///
/// The move is assumed to be produced by the move generator. The piece is relocated, the rook is
/// relocated as well if the move is castling, the pawn is taken if the move is en passant, then the
/// en passant target and the castling flags are updated.
pub fn make_move_unchecked(b: &mut Board, src: Coord, dst: Coord) {
    let cell = b.get(src);
    let castling = castling_side(b, src, dst);
    let ep_taken = enpassant_taken(b, src, dst);
    let ep_created = enpassant_created(b, src, dst);

    b.put(dst, cell);
    b.put(src, Cell::EMPTY);

    if let (Some(side), Some(color)) = (castling, cell.color()) {
        let rook_src = Coord::from_parts(geometry::rook_src_file(side), dst.rank());
        let rook_dst = Coord::from_parts(geometry::rook_dst_file(side), dst.rank());
        b.put(rook_src, Cell::EMPTY);
        b.put(rook_dst, Cell::from_parts(color, Piece::Rook));
        b.r.castling.mark_moved(rook_src);
    }

    if let Some(taken) = ep_taken {
        b.put(taken, Cell::EMPTY);
    }

    // Always recomputed, so the en passant chance lasts for exactly one move
    b.r.ep_target = ep_created;

    // A captured rook loses its castling as well
    b.r.castling.mark_moved(src);
    b.r.castling.mark_moved(dst);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{board, sq};
    use crate::types::CastlingState;

    fn play(b: &mut Board, moves: &[(&str, &str)]) {
        for &(src, dst) in moves {
            b.make_move(Move::new(sq(src), sq(dst))).unwrap();
        }
    }

    #[test]
    fn test_simple() {
        let mut b = Board::initial();
        make_move_unchecked(&mut b, sq("g1"), sq("f3"));
        assert!(b.is_empty(sq("g1")));
        assert_eq!(b.get(sq("f3")), Cell::from_parts(Color::White, Piece::Knight));
        assert_eq!(b.ep_target(), None);
        assert_eq!(b.castling(), CastlingState::INITIAL);
    }

    #[test]
    fn test_capture() {
        let mut b = board("Ke1 ke8 Rd1 nd7");
        make_move_unchecked(&mut b, sq("d1"), sq("d7"));
        assert_eq!(b.get(sq("d7")), Cell::from_parts(Color::White, Piece::Rook));
        assert_eq!(b.color(Color::Black).len(), 1);
        assert_eq!(b.color(Color::White).len(), 2);
    }

    #[test]
    fn test_castling_kingside() {
        let mut b = board("Ke1 Rh1 Ra1 ke8");
        assert_eq!(castling_side(&b, sq("e1"), sq("g1")), Some(CastlingSide::King));
        make_move_unchecked(&mut b, sq("e1"), sq("g1"));
        assert_eq!(b.get(sq("g1")), Cell::from_parts(Color::White, Piece::King));
        assert_eq!(b.get(sq("f1")), Cell::from_parts(Color::White, Piece::Rook));
        assert!(b.is_empty(sq("h1")));
        assert!(b.is_empty(sq("e1")));
        assert!(b.castling().king_moved(Color::White));
        assert!(b.castling().rook_moved(Color::White, CastlingSide::King));
        assert!(!b.castling().rook_moved(Color::White, CastlingSide::Queen));
    }

    #[test]
    fn test_castling_queenside() {
        let mut b = board("Ke1 ke8 ra8 rh8");
        assert_eq!(castling_side(&b, sq("e8"), sq("c8")), Some(CastlingSide::Queen));
        make_move_unchecked(&mut b, sq("e8"), sq("c8"));
        assert_eq!(b.get(sq("c8")), Cell::from_parts(Color::Black, Piece::King));
        assert_eq!(b.get(sq("d8")), Cell::from_parts(Color::Black, Piece::Rook));
        assert!(b.is_empty(sq("a8")));
        assert!(b.castling().king_moved(Color::Black));
        assert!(b.castling().rook_moved(Color::Black, CastlingSide::Queen));
        assert!(!b.castling().rook_moved(Color::Black, CastlingSide::King));
        assert_eq!(b.castling().to_string(), "KQ");
    }

    #[test]
    fn test_king_single_step_is_not_castling() {
        let b = board("Ke1 Rh1 ke8");
        assert_eq!(castling_side(&b, sq("e1"), sq("f1")), None);
        assert_eq!(castling_side(&b, sq("h1"), sq("f1")), None);
    }

    #[test]
    fn test_enpassant_window() {
        let mut b = Board::initial();
        play(&mut b, &[("e2", "e4")]);
        assert_eq!(b.ep_target(), Some(sq("e3")));
        play(&mut b, &[("g8", "f6")]);
        assert_eq!(b.ep_target(), None);
        play(&mut b, &[("e4", "e5"), ("d7", "d5")]);
        assert_eq!(b.ep_target(), Some(sq("d6")));
        assert!(b.legal_moves(sq("e5")).contains(&sq("d6")));

        play(&mut b, &[("e5", "d6")]);
        assert_eq!(b.get(sq("d6")), Cell::from_parts(Color::White, Piece::Pawn));
        assert!(b.is_empty(sq("d5")));
        assert!(b.is_empty(sq("e5")));
        assert_eq!(b.ep_target(), None);
        assert_eq!(b.color(Color::Black).len(), 15);
    }

    #[test]
    fn test_enpassant_expires() {
        let mut b = Board::initial();
        play(&mut b, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);
        assert!(b.legal_moves(sq("e5")).contains(&sq("d6")));
        play(&mut b, &[("h2", "h3"), ("a6", "a5")]);
        assert!(!b.legal_moves(sq("e5")).contains(&sq("d6")));
    }

    #[test]
    fn test_enpassant_helpers() {
        let b = Board::initial();
        assert_eq!(enpassant_created(&b, sq("e2"), sq("e4")), Some(sq("e3")));
        assert_eq!(enpassant_created(&b, sq("e2"), sq("e3")), None);
        assert_eq!(enpassant_created(&b, sq("d7"), sq("d5")), Some(sq("d6")));
        assert_eq!(enpassant_created(&b, sq("g1"), sq("g3")), None);

        let b = board("Ke1 ke8 Pe4 pd4");
        assert_eq!(enpassant_created(&b, sq("e4"), sq("e6")), None);
    }

    #[test]
    fn test_enpassant_own_target() {
        // The target belongs to White's double move, so White cannot use it
        let mut b = board("Ke1 ke8 Pe2 Pd2");
        make_move_unchecked(&mut b, sq("e2"), sq("e4"));
        assert_eq!(b.ep_target(), Some(sq("e3")));
        assert!(!is_enpassant_target(&b, sq("e3"), Color::White));
        assert!(is_enpassant_target(&b, sq("e3"), Color::Black));
        assert!(!b.legal_moves(sq("d2")).contains(&sq("e3")));
    }

    #[test]
    fn test_promotion_trigger() {
        let mut b = board("Ke1 ke8 Pa7 ph2");
        assert!(!promotion_triggered(&b, sq("a7")));
        b.make_move(Move::new(sq("a7"), sq("a8"))).unwrap();
        assert!(promotion_triggered(&b, sq("a8")));
        b.make_move(Move::new(sq("h2"), sq("h1"))).unwrap();
        assert!(promotion_triggered(&b, sq("h1")));
        assert!(!promotion_triggered(&b, sq("e1")));
        assert!(!promotion_triggered(&b, sq("e8")));
    }

    #[test]
    fn test_validate() {
        let b = Board::initial();
        assert!(Move::new(sq("e2"), sq("e4")).is_legal(&b));
        assert!(!Move::new(sq("e2"), sq("d3")).is_legal(&b));
        assert_eq!(
            Move::new(sq("d4"), sq("d5")).validate(&b),
            Err(MoveError::EmptySource(sq("d4")))
        );
        assert_eq!(Move::new(sq("e2"), sq("e4")).to_string(), "e2e4");
    }

    #[test]
    fn test_promote_kind() {
        for kind in PromoteKind::iter() {
            assert_eq!(PromoteKind::from_piece(kind.piece()), Some(kind));
        }
        assert_eq!(PromoteKind::from_piece(Piece::King), None);
        assert_eq!(PromoteKind::from_char('Q'), Some(PromoteKind::Queen));
        assert_eq!(PromoteKind::from_char('n'), Some(PromoteKind::Knight));
        assert_eq!(PromoteKind::from_char('k'), None);
    }
}
