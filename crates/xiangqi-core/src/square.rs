//! Board square representation.

use std::fmt;

/// A square on the 10×9 xiangqi board, indexed 0-89.
///
/// Squares are indexed row-major from black's back rank:
/// - row 0, col 0 = 0, ..., row 0, col 8 = 8
/// - row 9, col 8 = 89
///
/// Rows 0-4 are black's half of the board, rows 5-9 red's.
///
/// The textual form follows ICCS coordinates: a file letter `a`-`i` for
/// columns 0-8 followed by the digit `9 - row`, so red's back rank reads
/// `a0`..`i0` and black's `a9`..`i9`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of rows on the board.
    pub const ROWS: u8 = 10;
    /// Number of columns on the board.
    pub const COLS: u8 = 9;
    /// Number of squares on the board.
    pub const COUNT: usize = 90;

    /// Creates a square from row and column.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < Self::ROWS && col < Self::COLS {
            Some(Square(row * Self::COLS + col))
        } else {
            None
        }
    }

    /// Creates a square from a row and column known to be on the board.
    ///
    /// # Panics
    /// Panics if `row >= 10` or `col >= 9`.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < Self::ROWS && col < Self::COLS, "square off the board");
        Square(row * Self::COLS + col)
    }

    /// Creates a square from index (0-89).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates over all squares in row-major order.
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Returns the square displaced by `(d_row, d_col)`, if still on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Parses a square from ICCS coordinates (e.g., "e0").
    pub const fn from_coord(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'i' || !rank.is_ascii_digit() {
            return None;
        }
        Self::new(9 - (rank - b'0'), file - b'a')
    }

    /// Returns the index (0-89).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-9, black's back rank is row 0).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::COLS
    }

    /// Returns the column (0-8).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::COLS
    }

    /// Returns the ICCS coordinate text for this square.
    pub fn to_coord(self) -> String {
        format!("{}{}", (b'a' + self.col()) as char, 9 - self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, r{}c{})", self.to_coord(), self.row(), self.col())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coord())
    }
}
