//! Game controller: turn order, pending promotions and game status

use crate::board::Board;
use crate::movegen::SquareList;
use crate::moves::{Move, MoveError, PromoteKind};
use crate::types::{Color, Coord, CoordError};

use std::fmt;

use thiserror::Error;

/// Status of the game after the last move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Returns the winner, or `None` if the game is running or drawn
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Self::Checkmate { winner } => Some(winner),
            Self::Running | Self::Stalemate => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Self::Running => write!(f, "game is running"),
            Self::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            Self::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// What happened after a successful call to [`Game::play()`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveResult {
    /// The move is complete and the turn has passed to the opponent
    Done(GameStatus),
    /// The pawn on the given square must be promoted via [`Game::promote()`] before the turn passes
    PromotionRequired(Coord),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over: {0}")]
    Finished(GameStatus),
    #[error("pawn on {0} is waiting for promotion")]
    PromotionPending(Coord),
    #[error("no promotion is pending")]
    NoPromotionPending,
    #[error("piece on {coord} belongs to {owner}, but it is {side}'s turn")]
    NotYourPiece {
        coord: Coord,
        owner: Color,
        side: Color,
    },
    #[error("bad move: {0}")]
    Move(#[from] MoveError),
    #[error("bad square: {0}")]
    Coord(#[from] CoordError),
    /// The side that is not to move is in check, so its king could be captured
    #[error("{0} king is attacked, but it is not {0}'s turn")]
    OpponentKingAttacked(Color),
}

/// Chess game, i.e. a board plus whose turn it is
///
/// The game enforces alternation of turns and holds the turn while a pawn that reached its last
/// rank is waiting for promotion. After each completed move, the status is recalculated for the
/// side to move.
///
/// # Example
///
/// ```
/// # use chessrules::{Color, Coord, Game, GameStatus};
/// # use std::str::FromStr;
/// #
/// let mut g = Game::new();
/// for (src, dst) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
///     let src = Coord::from_str(src).unwrap();
///     let dst = Coord::from_str(dst).unwrap();
///     g.play(src, dst).unwrap();
/// }
/// assert_eq!(g.status(), GameStatus::Checkmate { winner: Color::Black });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side: Color,
    pending: Option<Coord>,
    status: GameStatus,
}

impl Game {
    /// Starts a new game from the initial position, with White to move
    pub fn new() -> Game {
        Game::start(Board::initial(), Color::White)
    }

    /// Starts a game from an arbitrary position with `side` to move
    ///
    /// The position is rejected if the opponent of `side` is in check.
    pub fn from_board(board: Board, side: Color) -> Result<Game, GameError> {
        if board.is_check(side.inv()) {
            return Err(GameError::OpponentKingAttacked(side.inv()));
        }
        Ok(Game::start(board, side))
    }

    fn start(board: Board, side: Color) -> Game {
        let mut res = Game {
            board,
            side,
            pending: None,
            status: GameStatus::Running,
        };
        res.status = res.calc_status();
        res
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move
    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the square of the pawn that is waiting for promotion, if any
    #[inline]
    pub fn pending_promotion(&self) -> Option<Coord> {
        self.pending
    }

    /// Returns the legal destinations of the piece on `c` for the side to move
    ///
    /// Returns an empty list if `c` is empty. Asking for the moves of the opponent's piece is an
    /// error, as are queries after the game ended or while a promotion is pending. Use
    /// [`Board::legal_moves()`] to inspect any piece regardless of turn.
    pub fn legal_moves(&self, c: Coord) -> Result<SquareList, GameError> {
        self.check_can_move()?;
        self.check_owner(c)?;
        Ok(self.board.legal_moves(c))
    }

    /// Same as [`Game::legal_moves()`], but takes raw coordinates
    pub fn legal_moves_xy(&self, file: isize, rank: isize) -> Result<SquareList, GameError> {
        self.legal_moves(Coord::try_from_xy(file, rank)?)
    }

    fn calc_status(&self) -> GameStatus {
        if self.board.has_legal_moves(self.side) {
            GameStatus::Running
        } else if self.board.is_check(self.side) {
            GameStatus::Checkmate {
                winner: self.side.inv(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    fn finish_turn(&mut self) -> GameStatus {
        self.side = self.side.inv();
        self.status = self.calc_status();
        self.status
    }

    fn check_can_move(&self) -> Result<(), GameError> {
        if self.status.is_finished() {
            return Err(GameError::Finished(self.status));
        }
        if let Some(p) = self.pending {
            return Err(GameError::PromotionPending(p));
        }
        Ok(())
    }

    fn check_owner(&self, c: Coord) -> Result<(), GameError> {
        match self.board.get(c).color() {
            Some(owner) if owner != self.side => Err(GameError::NotYourPiece {
                coord: c,
                owner,
                side: self.side,
            }),
            _ => Ok(()),
        }
    }

    /// Plays the move from `src` to `dst` for the side to move
    ///
    /// If a pawn reaches its last rank, the turn is held until [`Game::promote()`] is called.
    /// On error, the game is left unchanged.
    pub fn play(&mut self, src: Coord, dst: Coord) -> Result<MoveResult, GameError> {
        self.check_can_move()?;
        self.check_owner(src)?;
        self.board.make_move(Move::new(src, dst))?;
        if self.board.promotion_triggered(dst) {
            self.pending = Some(dst);
            return Ok(MoveResult::PromotionRequired(dst));
        }
        Ok(MoveResult::Done(self.finish_turn()))
    }

    /// Same as [`Game::play()`], but takes raw coordinates
    pub fn play_xy(
        &mut self,
        src: (isize, isize),
        dst: (isize, isize),
    ) -> Result<MoveResult, GameError> {
        let src = Coord::try_from_xy(src.0, src.1)?;
        let dst = Coord::try_from_xy(dst.0, dst.1)?;
        self.play(src, dst)
    }

    /// Completes the pending promotion with a piece of kind `kind` and passes the turn
    pub fn promote(&mut self, kind: PromoteKind) -> Result<GameStatus, GameError> {
        let c = self.pending.ok_or(GameError::NoPromotionPending)?;
        self.board.promote(c, kind)?;
        self.pending = None;
        Ok(self.finish_turn())
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
