//! Core types for xiangqi.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates on the 10×9 grid
//! - [`Move`] for move representation
//! - [`Layout`] for describing positions in text (test fixtures, CLI input)

mod color;
mod layout;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use layout::{Cell, Layout, LayoutError};
pub use mov::Move;
pub use piece::Piece;
pub use square::Square;
