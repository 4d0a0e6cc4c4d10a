//! Defines the Move type, the four directions the empty slot can slide.

use std::fmt;

/// One sliding move, named for the direction the *empty slot* travels.
/// Sliding the empty slot left means the tile to its left moves right.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Move {
  Left,
  Right,
  Up,
  Down,
}

impl Move {
  /// All moves, in the fixed order successor generation uses.
  pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

  /// The letter this move contributes to a solution string.
  pub const fn letter(self) -> char {
    match self {
      Move::Left => 'L',
      Move::Right => 'R',
      Move::Up => 'U',
      Move::Down => 'D',
    }
  }

  /// The inverse of `letter`.
  pub fn from_letter(c: char) -> Option<Move> {
    match c {
      'L' => Some(Move::Left),
      'R' => Some(Move::Right),
      'U' => Some(Move::Up),
      'D' => Some(Move::Down),
      _ => None,
    }
  }

  /// How the empty slot's flat index changes under this move, on a board
  /// of the given side.
  pub const fn delta(self, side: usize) -> isize {
    match self {
      Move::Left => -1,
      Move::Right => 1,
      Move::Up => -(side as isize),
      Move::Down => side as isize,
    }
  }

  /// The move that undoes this one.
  pub const fn opposite(self) -> Move {
    match self {
      Move::Left => Move::Right,
      Move::Right => Move::Left,
      Move::Up => Move::Down,
      Move::Down => Move::Up,
    }
  }
}

impl fmt::Display for Move {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.letter().fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn letters_round_trip() {
    for m in Move::ALL {
      assert_eq!(Some(m), Move::from_letter(m.letter()));
    }
    assert_eq!(None, Move::from_letter('X'));
  }

  #[test]
  fn opposites_cancel() {
    for m in Move::ALL {
      assert_eq!(m, m.opposite().opposite());
      assert_eq!(0, m.delta(4) + m.opposite().delta(4));
    }
  }
}
