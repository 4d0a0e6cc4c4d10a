//! Defines the Board type, one configuration of the sliding-tile puzzle.

use super::moves::Move;
use super::{InvalidBoard, MAX_SIDE};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// One puzzle configuration: `side²` tiles in row-major order, with 0
/// marking the empty slot and the labels 1..side² each appearing once.
///
/// Boards are immutable values: sliding produces a new board.  The empty
/// slot's index and the side length are derived from the tiles at
/// construction and never change, so equality and hashing consider the
/// tile sequence alone.
#[derive(Clone)]
pub struct Board {
  tiles: Vec<u8>,
  empty: usize,
  side: usize,
}

impl Board {
  /// Makes a board from a flat tile sequence.  The sequence's length must
  /// be the square of a side in 2..=[`MAX_SIDE`], and its values must be a
  /// permutation of `0..side²`.
  pub fn new(tiles: Vec<u8>) -> Result<Board, InvalidBoard> {
    let side = (2..=MAX_SIDE)
      .find(|s| s * s == tiles.len())
      .ok_or(InvalidBoard::BadLength(tiles.len()))?;
    let mut seen = [false; MAX_SIDE * MAX_SIDE];
    for &t in &tiles {
      let t = t as usize;
      if t >= tiles.len() || seen[t] {
        return Err(InvalidBoard::NotPermutation);
      }
      seen[t] = true;
    }
    let empty = tiles.iter().position(|&t| t == 0).unwrap(); // a permutation contains 0
    Ok(Board { tiles, empty, side })
  }

  /// Makes the goal board for the given side: ascending labels with the
  /// empty slot in the bottom-right corner.
  pub fn goal(side: usize) -> Board {
    debug_assert!((2..=MAX_SIDE).contains(&side));
    let count = side * side;
    let mut tiles: Vec<u8> = (1..count as u8).collect();
    tiles.push(0);
    Board {
      tiles,
      empty: count - 1,
      side,
    }
  }

  /// The side length N of this N×N board.
  pub fn side(&self) -> usize {
    self.side
  }

  /// The tiles in row-major order.
  pub fn tiles(&self) -> &[u8] {
    &self.tiles
  }

  /// The flat index of the empty slot.
  pub fn empty_index(&self) -> usize {
    self.empty
  }

  /// Slides the empty slot one step in the given direction, or returns
  /// `None` when that would leave the grid.
  pub fn slide(&self, m: Move) -> Option<Board> {
    let (row, col) = (self.empty / self.side, self.empty % self.side);
    let legal = match m {
      Move::Left => col > 0,
      Move::Right => col < self.side - 1,
      Move::Up => row > 0,
      Move::Down => row < self.side - 1,
    };
    if !legal {
      return None;
    }
    let to = (self.empty as isize + m.delta(self.side)) as usize;
    let mut tiles = self.tiles.clone();
    tiles.swap(self.empty, to);
    Some(Board {
      tiles,
      empty: to,
      side: self.side,
    })
  }

  /// Generates the boards reachable in one move, trying the empty slot's
  /// directions in the fixed order left, right, up, down.  Illegal
  /// directions contribute nothing, so the result holds 2 to 4 boards.
  pub fn neighbors(&self) -> Vec<Board> {
    Move::ALL.iter().filter_map(|&m| self.slide(m)).collect()
  }

  /// Replays a solution string against this board, one letter per move.
  /// Returns `None` if any letter is unknown or any move is illegal.
  pub fn apply_path(&self, path: &str) -> Option<Board> {
    let mut board = self.clone();
    for c in path.chars() {
      board = board.slide(Move::from_letter(c)?)?;
    }
    Some(board)
  }
}

impl PartialEq for Board {
  /// Value equality over the tile sequence; the other fields are derived
  /// from it.
  fn eq(&self, other: &Self) -> bool {
    self.tiles == other.tiles
  }
}

impl Eq for Board {}

impl Hash for Board {
  /// Hashes the tile sequence alone, consistent with `eq`.
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.tiles.hash(state);
  }
}

impl fmt::Display for Board {
  /// Prints this board in the solver's input format: the side length on
  /// the first line, then one row of tiles per line.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", self.side)?;
    let width = format!("{}", self.side * self.side - 1).len();
    for row in self.tiles.chunks(self.side) {
      for (i, t) in row.iter().enumerate() {
        if i > 0 {
          f.write_str(" ")?;
        }
        write!(f, "{:>width$}", t)?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

impl fmt::Debug for Board {
  /// Prints this board as its flat tile list.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:?}", self.tiles)
  }
}

impl FromStr for Board {
  type Err = String;

  /// Parses a board from whitespace-separated numbers: a side length N
  /// followed by N² tile values in row-major order, 0 denoting the empty
  /// slot.
  fn from_str(s: &str) -> Result<Board, String> {
    let mut tokens = s.split_whitespace();
    let side: usize = tokens
      .next()
      .ok_or("empty puzzle text")?
      .parse()
      .map_err(|_| "side length is not a number".to_string())?;
    if !(2..=MAX_SIDE).contains(&side) {
      return Err(format!("side length {} is not in 2..={}", side, MAX_SIDE));
    }
    let mut tiles = Vec::with_capacity(side * side);
    for _ in 0..side * side {
      let token = tokens
        .next()
        .ok_or_else(|| format!("expected {} tile values", side * side))?;
      let tile: u8 = token
        .parse()
        .map_err(|_| format!("bad tile value `{}`", token))?;
      tiles.push(tile);
    }
    if tokens.next().is_some() {
      return Err(format!("more than {} tile values", side * side));
    }
    Board::new(tiles).map_err(|e| e.to_string())
  }
}
