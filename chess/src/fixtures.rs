use crate::board::{Board, RawBoard};
use crate::types::{Cell, Coord};

use std::str::FromStr;

pub fn sq(s: &str) -> Coord {
    Coord::from_str(s).unwrap()
}

/// Builds a board from a list like `"Ke1 Ra1 ke8 pd7"`
///
/// Each item is a piece char followed by a square name. Nothing is considered moved, so castling
/// rights depend only on where the kings and rooks stand.
pub fn raw_board(pieces: &str) -> RawBoard {
    let mut raw = RawBoard::empty();
    for item in pieces.split_whitespace() {
        let mut chars = item.chars();
        let cell = Cell::from_char(chars.next().unwrap()).unwrap();
        raw.put(sq(chars.as_str()), cell);
    }
    raw
}

pub fn board(pieces: &str) -> Board {
    Board::try_from(raw_board(pieces)).unwrap()
}
