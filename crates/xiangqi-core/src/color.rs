//! Player color representation.

/// Represents the two sides in xiangqi. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// Both colors, red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Returns the row step a pawn of this color takes when moving forward
    /// (-1 for Red, +1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Returns the back rank row for this color (9 for Red, 0 for Black).
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Red => 9,
            Color::Black => 0,
        }
    }

    /// Returns true if `row` lies on this color's own side of the river.
    #[inline]
    pub const fn owns_row(self, row: u8) -> bool {
        match self {
            Color::Red => row >= 5,
            Color::Black => row <= 4,
        }
    }

    /// Returns true if `(row, col)` is inside this color's palace.
    #[inline]
    pub const fn palace_contains(self, row: u8, col: u8) -> bool {
        let rows_ok = match self {
            Color::Red => row >= 7 && row <= 9,
            Color::Black => row <= 2,
        };
        rows_ok && col >= 3 && col <= 5
    }

    /// Single-character tag used by the layout notation.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Black => 'b',
        }
    }

    /// Parses the layout tag for a side.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' | 'w' => Some(Color::Red),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}
