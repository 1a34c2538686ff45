//! Move representation.

use crate::Square;
use std::fmt;

/// A xiangqi move: one piece relocating from one square to another.
///
/// Encoded compactly: 7 bits from, 7 bits to = 14 bits of a `u16`.
/// Captures are not encoded; they are implied by the occupant of `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << 7))
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 & 0x7F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index(((self.0 >> 7) & 0x7F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the ICCS notation for this move (e.g., "h2e2").
    pub fn to_coord(self) -> String {
        format!("{}{}", self.from(), self.to())
    }

    /// Parses a move from ICCS notation. A `-` between the squares is accepted.
    ///
    /// This only checks the syntax; legality is up to the engine.
    pub fn from_coord(s: &str) -> Option<Self> {
        let s = s.trim();
        if !s.is_ascii() {
            return None;
        }
        let (from, to) = match s.len() {
            4 => (&s[0..2], &s[2..4]),
            5 if s.as_bytes()[2] == b'-' => (&s[0..2], &s[3..5]),
            _ => return None,
        };
        Some(Move::new(Square::from_coord(from)?, Square::from_coord(to)?))
    }

    /// A null move (placeholder, never legal since `from == to`).
    pub const NULL: Move = Move(0);
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coord())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coord())
    }
}
