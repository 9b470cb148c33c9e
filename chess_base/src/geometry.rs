use crate::types::{CastlingSide, Color, Coord, File, Rank};

pub const fn castling_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

/// Rank from which a pawn of color `c` may advance two squares
pub const fn double_move_src_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Farthest rank for pawns of color `c`
pub const fn promote_dst_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R8,
        Color::Black => Rank::R1,
    }
}

/// Rank on which a pawn of color `c` may land after capturing en passant
pub const fn enpassant_dst_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R6,
        Color::Black => Rank::R3,
    }
}

/// Direction of pawn travel along the ranks
pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

pub const fn king_home(c: Color) -> Coord {
    Coord::from_parts(File::E, castling_rank(c))
}

pub const fn rook_home(c: Color, s: CastlingSide) -> Coord {
    Coord::from_parts(rook_src_file(s), castling_rank(c))
}

pub const fn rook_src_file(s: CastlingSide) -> File {
    match s {
        CastlingSide::Queen => File::A,
        CastlingSide::King => File::H,
    }
}

/// File where the rook lands after castling, next to the king on the side it came from
pub const fn rook_dst_file(s: CastlingSide) -> File {
    match s {
        CastlingSide::Queen => File::D,
        CastlingSide::King => File::F,
    }
}

pub const fn king_dst_file(s: CastlingSide) -> File {
    match s {
        CastlingSide::Queen => File::C,
        CastlingSide::King => File::G,
    }
}

pub const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_DELTAS: [(isize, isize); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAG_DELTAS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const LINE_DELTAS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
