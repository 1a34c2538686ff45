//! Board layout notation: parsing and serialization.
//!
//! A layout is the plain description of a position: a 10×9 array of optional
//! `(piece, color)` pairs plus the side to move. Its text form is
//!
//! ```text
//! rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR r
//! ```
//!
//! Ten `/`-separated rows from row 0 (black's back rank) to row 9, piece
//! letters `k a b n r c p` (uppercase for red), digits for runs of empty
//! cells, then the side to move (`r` or `b`).

use crate::{Color, Piece, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a layout string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid side to move: expected 'r' or 'b', got '{0}'")]
    InvalidSideToMove(String),
}

/// A cell of a layout.
pub type Cell = Option<(Piece, Color)>;

/// A parsed board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Cells indexed `[row][col]`.
    pub cells: [[Cell; 9]; 10],
    /// The side to move.
    pub side_to_move: Color,
}

impl Layout {
    /// The standard starting position.
    pub const INITIAL: &'static str =
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR r";

    /// Creates an empty layout.
    pub fn empty(side_to_move: Color) -> Self {
        Layout {
            cells: [[None; 9]; 10],
            side_to_move,
        }
    }

    /// Creates the standard starting layout, red to move.
    pub fn initial() -> Self {
        const BACK_RANK: [Piece; 9] = [
            Piece::Chariot,
            Piece::Horse,
            Piece::Elephant,
            Piece::Advisor,
            Piece::King,
            Piece::Advisor,
            Piece::Elephant,
            Piece::Horse,
            Piece::Chariot,
        ];

        let mut layout = Layout::empty(Color::Red);
        for color in Color::ALL {
            let back = color.back_row();
            // Cannons stand two rows in front of the back rank, pawns three.
            let cannon_row = (back as i8 + 2 * color.forward()) as u8;
            let pawn_row = (back as i8 + 3 * color.forward()) as u8;

            for (col, piece) in BACK_RANK.iter().enumerate() {
                layout.cells[back as usize][col] = Some((*piece, color));
            }
            for col in [1, 7] {
                layout.cells[cannon_row as usize][col] = Some((Piece::Cannon, color));
            }
            for col in [0, 2, 4, 6, 8] {
                layout.cells[pawn_row as usize][col] = Some((Piece::Pawn, color));
            }
        }
        layout
    }

    /// Returns the cell at the given square.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Sets the cell at the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Parses a layout string.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(LayoutError::InvalidPartCount(parts.len()));
        }

        let side_to_move = match parts[1] {
            "r" | "w" => Color::Red,
            "b" => Color::Black,
            other => return Err(LayoutError::InvalidSideToMove(other.to_string())),
        };

        let mut layout = Layout::empty(side_to_move);
        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != Square::ROWS as usize {
            return Err(LayoutError::InvalidPlacement(format!(
                "expected 10 rows, got {}",
                rows.len()
            )));
        }

        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| *d > 0) {
                    col += run as usize;
                } else if let Some(cell) = Piece::from_char(c) {
                    if col < Square::COLS as usize {
                        layout.cells[row][col] = Some(cell);
                    }
                    col += 1;
                } else {
                    return Err(LayoutError::InvalidPlacement(format!(
                        "invalid character '{}' in row {}",
                        c, row
                    )));
                }
            }
            if col != Square::COLS as usize {
                return Err(LayoutError::InvalidPlacement(format!(
                    "row {} has {} cells, expected 9",
                    row, col
                )));
            }
        }

        Ok(layout)
    }

    /// Converts the layout back to its text form.
    pub fn to_notation(&self) -> String {
        let mut text = String::new();

        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                text.push('/');
            }
            let mut empty_count = 0;
            for cell in cells {
                match cell {
                    Some((piece, color)) => {
                        if empty_count > 0 {
                            text.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        text.push(piece.to_char(*color));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                text.push_str(&empty_count.to_string());
            }
        }

        text.push(' ');
        text.push(self.side_to_move.to_char());
        text
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
