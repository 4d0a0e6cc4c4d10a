//! Defines the distance estimator that prioritizes the search.

use crate::core::Board;
use std::collections::HashMap;

/// A memoizing estimator of a board's distance to the goal.
///
/// The estimate is the sum of Manhattan distances of the misplaced,
/// non-empty tiles to their goal slots, plus the empty slot's distance to
/// the bottom-right corner, all doubled.  The doubled estimate is part of
/// the report format and is inadmissible: it can overestimate the true
/// remaining cost, so a reported path is not guaranteed minimal on every
/// input.
///
/// The cache lives as long as the estimator, which the search scopes to a
/// single run.
pub struct Estimator {
  cache: HashMap<Board, u32>,
}

impl Estimator {
  pub fn new() -> Estimator {
    Estimator {
      cache: HashMap::new(),
    }
  }

  /// Estimates the cost of reaching the goal from `board`, memoized.
  pub fn estimate(&mut self, board: &Board) -> u32 {
    if let Some(&h) = self.cache.get(board) {
      return h;
    }
    let h = 2 * raw_distance(board);
    self.cache.insert(board.clone(), h);
    h
  }
}

impl Default for Estimator {
  fn default() -> Self {
    Self::new()
  }
}

/// The undoubled Manhattan sum, empty slot included.
fn raw_distance(board: &Board) -> u32 {
  let side = board.side();
  let last = side * side - 1;
  let mut cost = 0;
  for (i, &tile) in board.tiles().iter().enumerate() {
    // A tile's goal slot is tile − 1; the empty slot's is the last slot.
    let goal = if tile == 0 { last } else { tile as usize - 1 };
    cost += (i / side).abs_diff(goal / side) + (i % side).abs_diff(goal % side);
  }
  cost as u32
}

#[cfg(test)]
mod tests {
  use super::*;

  fn board(tiles: &[u8]) -> Board {
    Board::new(tiles.to_vec()).unwrap()
  }

  #[test]
  fn goal_estimates_to_zero() {
    let mut e = Estimator::new();
    assert_eq!(0, e.estimate(&Board::goal(3)));
    assert_eq!(0, e.estimate(&Board::goal(4)));
  }

  #[test]
  fn counts_doubled_manhattan_distance() {
    let mut e = Estimator::new();
    // 5 is one step from home, 8 is one step from home, and the empty
    // slot is two steps from the corner: 2 × (1 + 1 + 2) = 8.
    assert_eq!(8, e.estimate(&board(&[1, 2, 3, 4, 0, 6, 7, 5, 8])));
    // One slide left of the goal: the 8 and the empty slot are each one
    // step out: 2 × (1 + 1) = 4.
    assert_eq!(4, e.estimate(&board(&[1, 2, 3, 4, 5, 6, 7, 0, 8])));
  }

  #[test]
  fn empty_slot_contributes_its_corner_distance() {
    let mut e = Estimator::new();
    // 2×2 board: 1 and 2 are each one step from home, 3 is home, and the
    // empty slot is two steps from the corner: 2 × (1 + 1 + 2) = 8.
    assert_eq!(8, e.estimate(&board(&[0, 1, 3, 2])));
  }

  #[test]
  fn cache_hits_return_the_stored_value() {
    let mut e = Estimator::new();
    let b = board(&[1, 2, 3, 4, 0, 6, 7, 5, 8]);
    let first = e.estimate(&b);
    assert_eq!(first, e.estimate(&b));
    assert_eq!(1, e.cache.len());
  }
}
