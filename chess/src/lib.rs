//! Rule-correct chess for two players
//!
//! The crate keeps the state of a chess board, lists the legal moves of any piece, applies moves
//! (including castling, en passant and promotion), and detects check, checkmate and stalemate.
//!
//! [`Board`] is the rules engine itself and doesn't track whose turn it is. [`Game`] wraps it to
//! enforce alternating turns and to hold the turn until a pending promotion is resolved.
//!
//! # Example
//!
//! ```
//! # use chessrules::{Board, Coord, Move};
//! # use std::str::FromStr;
//! #
//! let mut b = Board::initial();
//! let src = Coord::from_str("g1").unwrap();
//! assert_eq!(b.legal_moves(src).len(), 2);
//!
//! b.make_move(Move::new(src, Coord::from_str("f3").unwrap())).unwrap();
//! assert!(b.is_empty(src));
//! ```

pub mod attack;
pub mod board;
pub mod castling;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod moves;

#[cfg(test)]
mod fixtures;

pub use chessrules_base::{bitboard, geometry, types};

pub use bitboard::Bitboard;
pub use board::{Board, RawBoard};
pub use game::{Game, GameStatus};
pub use movegen::{MoveList, SquareList};
pub use moves::{Move, MoveError, PromoteKind};
pub use types::{CastlingSide, CastlingState, Cell, Color, Coord, CoordError, File, Piece, Rank};
