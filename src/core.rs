//! Defines the core sliding-tile types.
//!
//! Among these are:
//!
//! - Board: one puzzle configuration, a flat row-major tile array
//! - Move: the four directions the empty slot can slide
//! - InvalidBoard: why a tile sequence is not a legal puzzle

mod board;
mod moves;

pub use board::*;
pub use moves::*;

use std::fmt;

/// The largest supported side length.  Tiles are stored as `u8`, and a
/// 16×16 puzzle's largest label is 255, so 16 is the ceiling the tile type
/// admits.
pub const MAX_SIDE: usize = 16;

static_assertions::const_assert!(MAX_SIDE * MAX_SIDE - 1 <= u8::MAX as usize);

/// Error for tile sequences that don't form a legal puzzle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidBoard {
  /// The number of tiles is not the square of a side in 2..=MAX_SIDE.
  BadLength(usize),
  /// The tiles are not a permutation of `0..side²` (this covers both a
  /// missing empty slot and duplicate labels).
  NotPermutation,
}

impl fmt::Display for InvalidBoard {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InvalidBoard::BadLength(n) => {
        write!(f, "{} tiles do not form a square board of side 2..={}", n, MAX_SIDE)
      }
      InvalidBoard::NotPermutation => {
        write!(f, "tiles must be a permutation of 0..side², with 0 the empty slot")
      }
    }
  }
}

impl std::error::Error for InvalidBoard {}
