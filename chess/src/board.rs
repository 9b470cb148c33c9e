//! Board and related things

use crate::bitboard::Bitboard;
use crate::movegen::{self, SquareList};
use crate::moves::{self, Move, MoveError, PromoteKind};
use crate::types::{CastlingState, Cell, Color, Coord, CoordError, File, Piece, Rank};
use crate::{geometry, legal};

use std::fmt::{self, Display};

use thiserror::Error;

/// Board validation error
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ValidateError {
    /// En passant target is not an empty square right behind a pawn that could have just
    /// advanced two squares
    #[error("invalid enpassant position {0}")]
    InvalidEnpassant(Coord),
    /// One of the sides doesn't have a king
    #[error("no king of color {0}")]
    NoKing(Color),
    /// One of the sides has more than one king
    #[error("more than one king of color {0}")]
    TooManyKings(Color),
    /// There is a pawn on its own back rank
    #[error("invalid pawn position {0}")]
    InvalidPawn(Coord),
}

/// Raw chess board
///
/// Raw board contains all the state needed to play from a position, but, unlike [`Board`], it is
/// not validated and may contain an impossible position.
///
/// Raw board can be used to build a position programmatically. After filling in the fields, it
/// must be converted to [`Board`] via [`Board::try_from()`].
///
/// # Example
///
/// ```
/// # use chessrules::{RawBoard, Board, File, Rank, Color, Piece, Cell};
/// #
/// let mut raw = RawBoard::empty();
/// raw.put2(File::B, Rank::R2, Cell::from_parts(Color::White, Piece::King));
/// raw.put2(File::D, Rank::R5, Cell::from_parts(Color::Black, Piece::King));
///
/// let board: Board = raw.try_into().unwrap();
/// assert!(!board.is_check(Color::White));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawBoard {
    /// Contents of the board
    ///
    /// The indices in this array are the indices of coordinates. Prefer [`RawBoard::get()`] and
    /// [`RawBoard::put()`] over indexing this array directly.
    pub cells: [Cell; 64],
    /// Which kings and rooks have already left their home squares
    pub castling: CastlingState,
    /// Square a pawn may capture into en passant on this move
    ///
    /// It is the square skipped over by the pawn that has just advanced two squares, or `None` if
    /// the last move was anything else.
    pub ep_target: Option<Coord>,
}

impl RawBoard {
    /// Returns an empty `RawBoard`
    ///
    /// Nothing is considered moved, so castling is available as soon as a king and its rook are
    /// put on their home squares.
    #[inline]
    pub const fn empty() -> RawBoard {
        RawBoard {
            cells: [Cell::EMPTY; 64],
            castling: CastlingState::INITIAL,
            ep_target: None,
        }
    }

    /// Returns a board with the initial position
    pub fn initial() -> RawBoard {
        let mut res = RawBoard::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Cell::from_parts(Color::White, Piece::Pawn));
            res.put2(file, Rank::R7, Cell::from_parts(Color::Black, Piece::Pawn));
        }
        for (color, rank) in [(Color::White, Rank::R1), (Color::Black, Rank::R8)] {
            res.put2(File::A, rank, Cell::from_parts(color, Piece::Rook));
            res.put2(File::B, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::C, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::D, rank, Cell::from_parts(color, Piece::Queen));
            res.put2(File::E, rank, Cell::from_parts(color, Piece::King));
            res.put2(File::F, rank, Cell::from_parts(color, Piece::Bishop));
            res.put2(File::G, rank, Cell::from_parts(color, Piece::Knight));
            res.put2(File::H, rank, Cell::from_parts(color, Piece::Rook));
        }
        res
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    /// Puts `cell` to the square with coordinate `c`
    #[inline]
    pub fn put(&mut self, c: Coord, cell: Cell) {
        self.cells[c.index()] = cell;
    }

    /// Puts `cell` to the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, cell: Cell) {
        self.put(Coord::from_parts(file, rank), cell);
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use chessrules::{RawBoard, board::PrettyStyle};
    /// #
    /// let r = RawBoard::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(r.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { raw: self, style }
    }
}

impl Default for RawBoard {
    #[inline]
    fn default() -> RawBoard {
        RawBoard::empty()
    }
}

/// Board that contains a valid position
///
/// This is the rules engine proper: it owns the pieces, the castling flags and the en passant
/// target, generates legal moves, applies them, and answers check and checkmate queries.
///
/// A `Board` always has exactly one king of each color. It can be changed only by applying moves
/// (see [`Board::make_move()`]) and by direct placement used to substitute a promoted pawn
/// (see [`Board::promote()`] and [`Board::set_piece()`]).
///
/// The board doesn't track whose turn it is. If you need turn order and game status, use
/// [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) r: RawBoard,
    pub(crate) white: Bitboard,
    pub(crate) black: Bitboard,
}

impl Board {
    /// Returns a board with the initial position
    pub fn initial() -> Board {
        let r = RawBoard::initial();
        let (white, black) = occupancy(&r);
        Board { r, white, black }
    }

    /// Returns a view over the raw board
    #[inline]
    pub fn raw(&self) -> &RawBoard {
        &self.r
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.r.get(c)
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.r.get2(file, rank)
    }

    #[inline]
    pub fn is_empty(&self, c: Coord) -> bool {
        self.r.get(c).is_empty()
    }

    #[inline]
    pub fn castling(&self) -> CastlingState {
        self.r.castling
    }

    #[inline]
    pub fn ep_target(&self) -> Option<Coord> {
        self.r.ep_target
    }

    /// Returns the set of squares occupied by pieces of color `c`
    #[inline]
    pub fn color(&self, c: Color) -> Bitboard {
        match c {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Returns the set of all occupied squares
    #[inline]
    pub fn all(&self) -> Bitboard {
        self.white | self.black
    }

    pub(crate) fn put(&mut self, c: Coord, cell: Cell) {
        self.white.unset(c);
        self.black.unset(c);
        match cell.color() {
            Some(Color::White) => self.white.set(c),
            Some(Color::Black) => self.black.set(c),
            None => {}
        }
        self.r.put(c, cell);
    }

    /// Puts `cell` on the square `c` directly, bypassing all the rules
    ///
    /// This exists to substitute a pawn that has just reached its last rank. Prefer
    /// [`Board::promote()`], which checks that a promotion really takes place.
    ///
    /// # Panics
    ///
    /// Panics if the placement removes or duplicates a king.
    pub fn set_piece(&mut self, c: Coord, cell: Cell) {
        let was_king = self.get(c).piece() == Some(Piece::King);
        let is_king = cell.piece() == Some(Piece::King);
        assert!(
            !was_king && !is_king,
            "kings cannot be placed or removed directly (square {})",
            c
        );
        self.put(c, cell);
    }

    /// Returns the position of the king of color `c`
    ///
    /// # Panics
    ///
    /// Panics if there is no such king, as a valid board always has one.
    pub fn king_pos(&self, c: Color) -> Coord {
        let king = Cell::from_parts(c, Piece::King);
        self.color(c)
            .into_iter()
            .find(|&p| self.get(p) == king)
            .unwrap_or_else(|| panic!("no {} king found on the board", c))
    }

    /// Returns the squares the piece on `c` may legally move to
    ///
    /// Returns an empty list if `c` is empty. The side to move is not checked here, so asking for
    /// the moves of the opponent's pieces is allowed.
    #[inline]
    pub fn legal_moves(&self, c: Coord) -> SquareList {
        movegen::legal_moves(self, c)
    }

    /// Same as [`Board::legal_moves()`], but takes raw coordinates that may be outside the board
    pub fn legal_moves_xy(&self, file: isize, rank: isize) -> Result<SquareList, CoordError> {
        Ok(self.legal_moves(Coord::try_from_xy(file, rank)?))
    }

    /// Applies the move from `src` to `dst` without any legality checks
    ///
    /// The move must come from [`Board::legal_moves()`]. Otherwise, the resulting position may be
    /// nonsensical. Use [`Board::make_move()`] for untrusted input.
    pub fn make_move_unchecked(&mut self, src: Coord, dst: Coord) {
        moves::make_move_unchecked(self, src, dst);
        #[cfg(feature = "selftest")]
        self.selftest();
    }

    /// Validates the move and applies it
    ///
    /// If the move is not legal, returns an error and leaves the board unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        mv.validate(self)?;
        self.make_move_unchecked(mv.src(), mv.dst());
        Ok(())
    }

    /// Returns `true` if a pawn is standing on its last rank at `c` and must be promoted
    #[inline]
    pub fn promotion_triggered(&self, c: Coord) -> bool {
        moves::promotion_triggered(self, c)
    }

    /// Replaces the pawn that reached its last rank on `c` with a piece of kind `kind`
    pub fn promote(&mut self, c: Coord, kind: PromoteKind) -> Result<(), MoveError> {
        let color = match self.get(c).color() {
            Some(color) if self.promotion_triggered(c) => color,
            _ => return Err(MoveError::NoPromotion(c)),
        };
        self.put(c, Cell::from_parts(color, kind.piece()));
        Ok(())
    }

    /// Returns `true` if the king of color `c` is attacked
    #[inline]
    pub fn is_check(&self, c: Color) -> bool {
        legal::is_king_attacked(self, c)
    }

    /// Returns `true` if color `c` has at least one legal move
    #[inline]
    pub fn has_legal_moves(&self, c: Color) -> bool {
        movegen::has_legal_moves(self, c)
    }

    /// Returns `true` if color `c` is checkmated
    #[inline]
    pub fn is_checkmate(&self, c: Color) -> bool {
        legal::is_checkmate(self, c)
    }

    /// Returns `true` if color `c` is not in check, but has no legal moves
    #[inline]
    pub fn is_stalemate(&self, c: Color) -> bool {
        legal::is_stalemate(self, c)
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// See docs for [`RawBoard::pretty()`] for more usage details.
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        self.r.pretty(style)
    }

    #[cfg(feature = "selftest")]
    fn selftest(&self) {
        for color in [Color::White, Color::Black] {
            let king = Cell::from_parts(color, Piece::King);
            let count = self.r.cells.iter().filter(|&&c| c == king).count();
            assert_eq!(count, 1, "expected exactly one {} king, found {}", color, count);
        }
        assert_eq!(occupancy(&self.r), (self.white, self.black));
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::initial()
    }
}

fn occupancy(raw: &RawBoard) -> (Bitboard, Bitboard) {
    let mut white = Bitboard::EMPTY;
    let mut black = Bitboard::EMPTY;
    for coord in Coord::iter() {
        match raw.get(coord).color() {
            Some(Color::White) => white.set(coord),
            Some(Color::Black) => black.set(coord),
            None => {}
        }
    }
    (white, black)
}

/// Checks that `p` is empty and a pawn that has just advanced two squares stands beyond it
fn is_valid_ep_target(raw: &RawBoard, p: Coord) -> bool {
    let mover = match p.rank() {
        r if r == geometry::enpassant_dst_rank(Color::Black) => Color::White,
        r if r == geometry::enpassant_dst_rank(Color::White) => Color::Black,
        _ => return false,
    };
    let pawn = Cell::from_parts(mover, Piece::Pawn);
    raw.get(p).is_empty()
        && p.try_shift(0, geometry::pawn_forward_delta(mover))
            .map_or(false, |c| raw.get(c) == pawn)
}

impl TryFrom<RawBoard> for Board {
    type Error = ValidateError;

    fn try_from(raw: RawBoard) -> Result<Board, ValidateError> {
        // Check InvalidEnpassant
        if let Some(p) = raw.ep_target {
            if !is_valid_ep_target(&raw, p) {
                return Err(ValidateError::InvalidEnpassant(p));
            }
        }

        // Check NoKing, TooManyKings
        for color in [Color::White, Color::Black] {
            let king = Cell::from_parts(color, Piece::King);
            match raw.cells.iter().filter(|&&c| c == king).count() {
                0 => return Err(ValidateError::NoKing(color)),
                1 => {}
                _ => return Err(ValidateError::TooManyKings(color)),
            }
        }

        // Check InvalidPawn. A pawn on the opponent's back rank is fine, it just waits for
        // promotion.
        for color in [Color::White, Color::Black] {
            let rank = geometry::castling_rank(color);
            let pawn = Cell::from_parts(color, Piece::Pawn);
            if let Some(file) = File::iter().find(|&f| raw.get2(f, rank) == pawn) {
                return Err(ValidateError::InvalidPawn(Coord::from_parts(file, rank)));
            }
        }

        let (white, black) = occupancy(&raw);
        Ok(Board {
            r: raw,
            white,
            black,
        })
    }
}

impl TryFrom<&RawBoard> for Board {
    type Error = ValidateError;

    fn try_from(raw: &RawBoard) -> Result<Board, ValidateError> {
        (*raw).try_into()
    }
}

/// Style for [`RawBoard::pretty()`] and [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`RawBoard::pretty()`] for more details.
pub struct Pretty<'a> {
    raw: &'a RawBoard,
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(c: Cell) -> char;

    fn fmt(r: &RawBoard, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter().rev() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(r.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(c: Cell) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(c: Cell) -> char {
        c.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.raw, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.raw, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{board, raw_board, sq};
    use crate::types::CastlingSide;

    #[test]
    fn test_initial() {
        let b = Board::initial();
        assert_eq!(b.raw(), &RawBoard::initial());
        assert_eq!(b.all().len(), 32);
        assert_eq!(b.color(Color::White).len(), 16);
        assert_eq!(b.color(Color::Black).len(), 16);
        assert_eq!(b.ep_target(), None);
        assert_eq!(b.castling(), CastlingState::INITIAL);
        assert_eq!(
            b.get2(File::D, Rank::R1),
            Cell::from_parts(Color::White, Piece::Queen)
        );
        assert_eq!(
            b.get2(File::E, Rank::R8),
            Cell::from_parts(Color::Black, Piece::King)
        );
        assert!(b.is_empty(sq("e4")));
        assert!(!b.is_empty(sq("e2")));
        assert_eq!(b.king_pos(Color::White), sq("e1"));
        assert_eq!(b.king_pos(Color::Black), sq("e8"));
        assert_eq!(Board::try_from(RawBoard::initial()), Ok(b));
    }

    #[test]
    fn test_validate() {
        let mut raw = RawBoard::empty();
        raw.put(sq("e1"), Cell::from_parts(Color::White, Piece::King));
        assert_eq!(
            Board::try_from(raw),
            Err(ValidateError::NoKing(Color::Black))
        );

        raw.put(sq("e8"), Cell::from_parts(Color::Black, Piece::King));
        assert!(Board::try_from(raw).is_ok());

        let mut two_kings = raw;
        two_kings.put(sq("a8"), Cell::from_parts(Color::Black, Piece::King));
        assert_eq!(
            Board::try_from(two_kings),
            Err(ValidateError::TooManyKings(Color::Black))
        );

        let mut bad_pawn = raw;
        bad_pawn.put(sq("c1"), Cell::from_parts(Color::White, Piece::Pawn));
        assert_eq!(
            Board::try_from(bad_pawn),
            Err(ValidateError::InvalidPawn(sq("c1")))
        );

        let mut promoting_pawn = raw;
        promoting_pawn.put(sq("c8"), Cell::from_parts(Color::White, Piece::Pawn));
        assert!(Board::try_from(promoting_pawn).is_ok());

        let mut bad_ep = raw;
        bad_ep.ep_target = Some(sq("d4"));
        assert_eq!(
            Board::try_from(bad_ep),
            Err(ValidateError::InvalidEnpassant(sq("d4")))
        );
    }

    #[test]
    fn test_validate_enpassant() {
        let with_ep = |pieces: &str, ep: &str| {
            let mut raw = raw_board(pieces);
            raw.ep_target = Some(sq(ep));
            Board::try_from(raw)
        };

        // White pawn has just advanced e2-e4
        assert!(with_ep("Ke1 ke8 Pe4 pd4", "e3").is_ok());
        // Black pawn has just advanced c7-c5
        assert!(with_ep("Ke1 ke8 pc5 Pd5", "c6").is_ok());

        // No pawn beyond the target, only a king
        assert_eq!(
            with_ep("Ke4 ke8 pd4", "e3"),
            Err(ValidateError::InvalidEnpassant(sq("e3")))
        );
        // The pawn beyond the target has the wrong color
        assert_eq!(
            with_ep("Ke1 ke8 pe4 Pd4", "e3"),
            Err(ValidateError::InvalidEnpassant(sq("e3")))
        );
        // Target is occupied
        assert_eq!(
            with_ep("Ke1 ke8 Pe4 Ne3 pd4", "e3"),
            Err(ValidateError::InvalidEnpassant(sq("e3")))
        );
        assert_eq!(
            with_ep("Ke1 ke8 Pe4", "e6"),
            Err(ValidateError::InvalidEnpassant(sq("e6")))
        );
    }

    #[test]
    #[should_panic(expected = "no black king")]
    fn test_missing_king_panics() {
        let mut b = Board::initial();
        // Bypass `set_piece()` to break the invariant on purpose
        b.put(sq("e8"), Cell::EMPTY);
        b.king_pos(Color::Black);
    }

    #[test]
    #[should_panic(expected = "kings cannot be placed")]
    fn test_set_piece_king() {
        let mut b = Board::initial();
        b.set_piece(sq("e4"), Cell::from_parts(Color::White, Piece::King));
    }

    #[test]
    fn test_set_piece() {
        let mut b = Board::initial();
        b.set_piece(sq("e2"), Cell::EMPTY);
        b.set_piece(sq("e4"), Cell::from_parts(Color::White, Piece::Pawn));
        assert!(b.is_empty(sq("e2")));
        assert!(b.color(Color::White).has(sq("e4")));
        assert!(!b.color(Color::White).has(sq("e2")));

        b.set_piece(sq("e4"), Cell::from_parts(Color::Black, Piece::Queen));
        assert!(b.color(Color::Black).has(sq("e4")));
        assert!(!b.color(Color::White).has(sq("e4")));
    }

    #[test]
    fn test_promote() {
        let mut b = board("Ke1 ke8 Pb8 pg1 Pc7");
        assert!(b.promotion_triggered(sq("b8")));
        assert!(b.promotion_triggered(sq("g1")));
        assert!(!b.promotion_triggered(sq("c7")));
        assert!(!b.promotion_triggered(sq("e1")));
        assert!(!b.promotion_triggered(sq("d4")));

        assert_eq!(
            b.promote(sq("c7"), PromoteKind::Queen),
            Err(MoveError::NoPromotion(sq("c7")))
        );
        assert_eq!(b.promote(sq("b8"), PromoteKind::Knight), Ok(()));
        assert_eq!(b.get(sq("b8")), Cell::from_parts(Color::White, Piece::Knight));
        assert!(!b.promotion_triggered(sq("b8")));

        assert_eq!(b.promote(sq("g1"), PromoteKind::Queen), Ok(()));
        assert_eq!(b.get(sq("g1")), Cell::from_parts(Color::Black, Piece::Queen));
        assert!(b.is_check(Color::White));
    }

    #[test]
    fn test_legal_moves_xy() {
        let b = Board::initial();
        assert_eq!(b.legal_moves_xy(6, 0).map(|l| l.len()), Ok(2));
        assert_eq!(
            b.legal_moves_xy(8, 3),
            Err(CoordError::OutOfBoard { file: 8, rank: 3 })
        );
        assert_eq!(
            b.legal_moves_xy(0, -1),
            Err(CoordError::OutOfBoard { file: 0, rank: -1 })
        );
    }

    #[test]
    fn test_make_move_checked() {
        let mut b = Board::initial();
        assert_eq!(
            b.make_move(Move::new(sq("e2"), sq("e5"))),
            Err(MoveError::NotLegal(Move::new(sq("e2"), sq("e5"))))
        );
        assert_eq!(
            b.make_move(Move::new(sq("e4"), sq("e5"))),
            Err(MoveError::EmptySource(sq("e4")))
        );
        assert_eq!(b, Board::initial());

        assert_eq!(b.make_move(Move::new(sq("e2"), sq("e4"))), Ok(()));
        assert_eq!(b.ep_target(), Some(sq("e3")));
        assert_eq!(b.get(sq("e4")), Cell::from_parts(Color::White, Piece::Pawn));
        assert!(b.is_empty(sq("e2")));
    }

    #[test]
    fn test_castling_state_persists() {
        let mut b = Board::initial();
        for (src, dst) in [("g1", "f3"), ("g8", "f6"), ("h1", "g1"), ("f6", "g8"), ("g1", "h1")] {
            b.make_move(Move::new(sq(src), sq(dst))).unwrap();
        }
        assert!(b.castling().rook_moved(Color::White, CastlingSide::King));
        assert!(!b.castling().can_castle(Color::White, CastlingSide::King));
        assert!(b.castling().can_castle(Color::White, CastlingSide::Queen));
        assert!(b.castling().can_castle(Color::Black, CastlingSide::King));
        assert_eq!(b.castling().to_string(), "Qkq");
    }

    #[test]
    fn test_pretty() {
        let b = board("Ke1 ke8 Qd4 pa7");
        let res = r#"
8|....k...
7|p.......
6|........
5|........
4|...Q....
3|........
2|........
1|....K...
-+--------
 |abcdefgh
"#;
        assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());

        let res = r#"
8│....♚...
7│♟.......
6│........
5│........
4│...♕....
3│........
2│........
1│....♔...
─┼────────
 │abcdefgh
"#;
        assert_eq!(b.pretty(PrettyStyle::Utf8).to_string().trim(), res.trim());
    }
}
