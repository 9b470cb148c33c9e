//! # Base types for chessrules
//!
//! This is an auxiliary crate for `chessrules`, which contains the plain value types: squares,
//! colors, pieces, castling flags and square sets. It has no knowledge of the chess rules themselves.
//!
//! Normally you don't want to use this crate directly. Use `chessrules` instead, which re-exports
//! everything from here.

pub mod bitboard;
pub mod geometry;
pub mod types;
