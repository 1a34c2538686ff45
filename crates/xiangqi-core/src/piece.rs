//! Xiangqi piece representation.

use crate::Color;

/// The seven types of xiangqi pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    King = 0,
    Advisor = 1,
    Elephant = 2,
    Horse = 3,
    Chariot = 4,
    Cannon = 5,
    Pawn = 6,
}

impl Piece {
    /// All piece types in order.
    pub const ALL: [Piece; 7] = [
        Piece::King,
        Piece::Advisor,
        Piece::Elephant,
        Piece::Horse,
        Piece::Chariot,
        Piece::Cannon,
        Piece::Pawn,
    ];

    /// Returns the layout character for this piece with the given color.
    ///
    /// Red pieces are uppercase, black pieces lowercase.
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            Piece::King => 'k',
            Piece::Advisor => 'a',
            Piece::Elephant => 'b',
            Piece::Horse => 'n',
            Piece::Chariot => 'r',
            Piece::Cannon => 'c',
            Piece::Pawn => 'p',
        };
        match color {
            Color::Red => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a layout character into a piece and color.
    pub const fn from_char(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::Red
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'k' => Piece::King,
            'a' => Piece::Advisor,
            'b' => Piece::Elephant,
            'n' => Piece::Horse,
            'r' => Piece::Chariot,
            'c' => Piece::Cannon,
            'p' => Piece::Pawn,
            _ => return None,
        };
        Some((piece, color))
    }

    /// Returns true if this piece is confined to its palace.
    #[inline]
    pub const fn is_palace_bound(self) -> bool {
        matches!(self, Piece::King | Piece::Advisor)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::King => "King",
            Piece::Advisor => "Advisor",
            Piece::Elephant => "Elephant",
            Piece::Horse => "Horse",
            Piece::Chariot => "Chariot",
            Piece::Cannon => "Cannon",
            Piece::Pawn => "Pawn",
        };
        write!(f, "{}", name)
    }
}
