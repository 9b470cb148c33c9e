use crate::types::{Coord, File, Rank};
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::fmt;
use std::iter::{FromIterator, IntoIterator};

/// Set of squares, one bit per square with a1 as the lowest bit
#[derive(
    Default, Copy, Clone, PartialEq, Eq, Hash, BitAnd, BitAndAssign, BitOr, BitOrAssign, Not,
)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub const fn from_raw(val: u64) -> Bitboard {
        Bitboard(val)
    }

    #[inline]
    const fn mask(coord: Coord) -> u64 {
        1_u64 << coord.index()
    }

    pub const fn with(self, coord: Coord) -> Bitboard {
        Bitboard(self.0 | Self::mask(coord))
    }

    #[inline]
    pub fn set(&mut self, coord: Coord) {
        self.0 |= Self::mask(coord);
    }

    #[inline]
    pub fn unset(&mut self, coord: Coord) {
        self.0 &= !Self::mask(coord);
    }

    pub const fn has(&self, coord: Coord) -> bool {
        self.0 & Self::mask(coord) != 0
    }

    /// Number of squares in the set
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_nonempty(&self) -> bool {
        !self.is_empty()
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_set().entries(*self).finish()
    }
}

/// Prints the set rank by rank, from the eighth rank down to the first one
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter().rev() {
            if rank != Rank::R8 {
                write!(f, "/")?;
            }
            for file in File::iter() {
                let bit = self.has(Coord::from_parts(file, rank));
                write!(f, "{}", if bit { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

/// Iterator over the squares of a [`Bitboard`], in index order
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.0 &= self.0 - 1;
        Some(Coord::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for Bitboard {
    type Item = Coord;
    type IntoIter = Iter;

    #[inline]
    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl FromIterator<Coord> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sq(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    #[test]
    fn test_iter() {
        let bb: Bitboard = [sq("a4"), sq("e2"), sq("f3")].into_iter().collect();
        assert_eq!(bb.len(), 3);
        assert_eq!(bb.into_iter().len(), 3);
        assert_eq!(
            bb.into_iter().collect::<Vec<_>>(),
            vec![sq("e2"), sq("f3"), sq("a4")],
        );
        assert_eq!(Bitboard::EMPTY.into_iter().next(), None);
    }

    #[test]
    fn test_set_ops() {
        let mut bb = Bitboard::EMPTY;
        assert!(bb.is_empty());
        bb.set(sq("h8"));
        bb.set(sq("a1"));
        assert!(bb.is_nonempty());
        assert!(bb.has(sq("h8")) && bb.has(sq("a1")));
        bb.unset(sq("h8"));
        assert_eq!(bb, Bitboard::from_raw(1));

        let lhs = Bitboard::EMPTY.with(sq("a4")).with(sq("e2"));
        let rhs = Bitboard::EMPTY.with(sq("e2")).with(sq("f3"));
        assert_eq!(lhs & rhs, Bitboard::EMPTY.with(sq("e2")));
        assert_eq!((lhs | rhs).len(), 3);
        assert_eq!((!lhs).len(), 62);
    }

    #[test]
    fn test_format() {
        let bb: Bitboard = [sq("a4"), sq("e2"), sq("f3"), sq("h8")].into_iter().collect();
        assert_eq!(
            bb.to_string(),
            "00000001/00000000/00000000/00000000/10000000/00000100/00001000/00000000"
        );
        assert_eq!(format!("{:?}", Bitboard::EMPTY.with(sq("c5"))), "{Coord(c5)}");
    }
}
