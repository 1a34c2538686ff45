//! Xiangqi board representation.
//!
//! The grid is the single source of truth for piece placement: a piece's row
//! and column are the coordinates of the cell holding it. Each occupant
//! carries a stable [`PieceId`] that travels with it from cell to cell, so
//! callers can follow a piece across moves via [`Board::locate`].

use std::fmt;
use std::ops::{Deref, DerefMut};

use thiserror::Error;
use xiangqi_core::{Color, Layout, Move, Piece, Square};

/// Stable identity of a piece for external bookkeeping (e.g. UI sync).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u8);

impl PieceId {
    /// Returns the raw identity number.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece-{}", self.0)
    }
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub piece: Piece,
    pub color: Color,
    pub id: PieceId,
}

/// Structural problems found by [`Board::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no {0} king")]
    MissingKing(Color),

    #[error("board has more than one {0} king")]
    DuplicateKing(Color),

    #[error("{0} is in check but it is not {0}'s turn")]
    OpponentInCheck(Color),
}

/// The 10×9 xiangqi board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Occupant>; Square::COUNT],
    next_id: u8,
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Board {
            cells: [None; Square::COUNT],
            next_id: 0,
        }
    }

    /// Creates the standard starting position.
    pub fn initial() -> Self {
        Self::from_layout(&Layout::initial())
    }

    /// Builds a board from a layout. Identities are handed out in
    /// row-major order starting at 0.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Board::empty();
        for sq in Square::iter() {
            if let Some((piece, color)) = layout.get(sq) {
                board.put(sq, piece, color);
            }
        }
        board
    }

    /// Converts the board back into a layout with the given side to move.
    pub fn to_layout(&self, side_to_move: Color) -> Layout {
        let mut layout = Layout::empty(side_to_move);
        for (sq, occupant) in self.pieces() {
            layout.set(sq, Some((occupant.piece, occupant.color)));
        }
        layout
    }

    /// Places a new piece, replacing whatever stood on `sq`, and returns its identity.
    pub fn put(&mut self, sq: Square, piece: Piece, color: Color) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.cells[sq.index() as usize] = Some(Occupant { piece, color, id });
        id
    }

    /// Returns the occupant of the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Occupant> {
        self.cells[sq.index() as usize]
    }

    /// Returns true if nothing stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index() as usize].is_none()
    }

    /// Iterates over all pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::iter().filter_map(move |sq| self.piece_at(sq).map(|o| (sq, o)))
    }

    /// Iterates over the pieces of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        self.pieces().filter(move |(_, o)| o.color == color)
    }

    /// Returns the square of the given color's king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, o)| o.piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Returns the square currently holding the piece with identity `id`.
    pub fn locate(&self, id: PieceId) -> Option<Square> {
        self.pieces().find(|(_, o)| o.id == id).map(|(sq, _)| sq)
    }

    /// Counts the pieces strictly between two squares sharing a row or column.
    ///
    /// Squares that share neither return 0.
    pub fn count_between(&self, a: Square, b: Square) -> usize {
        if a.row() == b.row() {
            let (lo, hi) = (a.col().min(b.col()), a.col().max(b.col()));
            (lo + 1..hi)
                .filter(|&col| !self.is_empty(Square::at(a.row(), col)))
                .count()
        } else if a.col() == b.col() {
            let (lo, hi) = (a.row().min(b.row()), a.row().max(b.row()));
            (lo + 1..hi)
                .filter(|&row| !self.is_empty(Square::at(row, a.col())))
                .count()
        } else {
            0
        }
    }

    /// Moves the piece on `mv.from()` to `mv.to()` and returns whatever stood
    /// on the destination.
    ///
    /// No legality checks are done; the caller must have validated the move.
    pub fn apply_move(&mut self, mv: Move) -> Option<Occupant> {
        let (from, to) = (mv.from().index() as usize, mv.to().index() as usize);
        debug_assert_ne!(from, to, "null move applied");
        debug_assert!(self.cells[from].is_some(), "no piece on {}", mv.from());
        let moving = self.cells[from].take();
        std::mem::replace(&mut self.cells[to], moving)
    }

    /// Reverts [`apply_move`](Board::apply_move), restoring `captured` on the destination.
    pub fn undo_move(&mut self, mv: Move, captured: Option<Occupant>) {
        let (from, to) = (mv.from().index() as usize, mv.to().index() as usize);
        self.cells[from] = self.cells[to].take();
        self.cells[to] = captured;
    }

    /// Applies a move for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board and undoes the move when dropped.
    pub fn make_move(&mut self, mv: Move) -> MoveGuard<'_> {
        let captured = self.apply_move(mv);
        MoveGuard {
            board: self,
            mv,
            captured,
        }
    }

    /// Checks that each side has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let kings = self
                .pieces_of(color)
                .filter(|(_, o)| o.piece == Piece::King)
                .count();
            match kings {
                0 => return Err(BoardError::MissingKing(color)),
                1 => {}
                _ => return Err(BoardError::DuplicateKing(color)),
            }
        }
        Ok(())
    }

    /// The placement part of the layout notation.
    fn placement(&self) -> String {
        let text = self.to_layout(Color::Red).to_notation();
        text.split(' ').next().unwrap_or_default().to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.placement()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Square::ROWS {
            if row == 5 {
                writeln!(f, "  ~~~~~~~~~~~~~~~~~")?;
            }
            write!(f, "{}", 9 - row)?;
            for col in 0..Square::COLS {
                let c = match self.piece_at(Square::at(row, col)) {
                    Some(o) => o.piece.to_char(o.color),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h i")
    }
}

/// A move applied to a board, undone when the guard is dropped.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    mv: Move,
    captured: Option<Occupant>,
}

impl MoveGuard<'_> {
    /// The move held by this guard.
    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The piece captured by the move, if any.
    #[inline]
    pub fn captured(&self) -> Option<Occupant> {
        self.captured
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.mv, self.captured);
    }
}
