//! Defines the solvability gate: an inversion-parity test that decides,
//! without searching, whether the goal is reachable from a board.

use crate::core::Board;
use itertools::Itertools;

/// Tells whether the goal board can be reached from `board`.
///
/// Uses the standard inversion-parity argument: an inversion is a pair of
/// non-empty tiles appearing in reading order with the greater label
/// first.  On an odd side the inversion count's parity is invariant under
/// sliding; on an even side the empty slot's row enters the invariant.
pub fn is_solvable(board: &Board) -> bool {
  let inversions = board
    .tiles()
    .iter()
    .filter(|&&t| t != 0)
    .tuple_combinations()
    .filter(|(a, b)| a > b)
    .count();

  let side = board.side();
  let odd_side = side % 2 != 0;
  let odd_inversions = inversions % 2 != 0;
  // The empty slot's 1-indexed row from the bottom is odd exactly when its
  // row from the top has the same parity (odd side) or the opposite parity
  // (even side).
  let row_from_top = board.empty_index() / side + 1;
  let odd_empty_row_from_bottom = if odd_side {
    row_from_top % 2 != 0
  } else {
    row_from_top % 2 == 0
  };

  (odd_side && !odd_inversions)
    || (!odd_side && odd_inversions && !odd_empty_row_from_bottom)
    || (!odd_inversions && odd_empty_row_from_bottom)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;
  use std::collections::VecDeque;

  fn board(tiles: &[u8]) -> Board {
    Board::new(tiles.to_vec()).unwrap()
  }

  /// All boards reachable from the goal by sliding, found by brute force.
  fn reachable_from_goal(side: usize) -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(Board::goal(side));
    queue.push_back(Board::goal(side));
    while let Some(b) = queue.pop_front() {
      for n in b.neighbors() {
        if seen.insert(n.clone()) {
          queue.push_back(n);
        }
      }
    }
    seen
  }

  #[test]
  fn goal_boards_are_solvable() {
    for side in 2..=5 {
      assert!(is_solvable(&Board::goal(side)));
    }
  }

  #[test]
  fn odd_side_examples() {
    assert!(is_solvable(&board(&[1, 2, 3, 4, 0, 6, 7, 5, 8])));
    // The goal with its last two tiles transposed is unreachable.
    assert!(!is_solvable(&board(&[1, 2, 3, 4, 5, 6, 8, 7, 0])));
  }

  #[test]
  fn even_side_examples() {
    // Sam Loyd's unsolvable 14-15 swap.
    assert!(!is_solvable(&board(&[
      1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0
    ])));
    // One slide away from the goal.
    assert!(is_solvable(&board(&[
      1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15
    ])));
  }

  #[test]
  fn agrees_with_brute_force_on_2x2() {
    // Half of the 24 tile permutations are reachable from the goal; the
    // parity test must pick out exactly that half.
    let reachable = reachable_from_goal(2);
    assert_eq!(12, reachable.len());
    let mut checked = 0;
    for perm in (0u8..4).permutations(4) {
      let b = board(&perm);
      assert_eq!(reachable.contains(&b), is_solvable(&b), "{:?}", b);
      checked += 1;
    }
    assert_eq!(24, checked);
  }

  #[test]
  fn sliding_preserves_solvability() {
    let mut b = board(&[1, 2, 3, 4, 0, 6, 7, 5, 8]);
    for m in crate::core::Move::ALL {
      if let Some(next) = b.slide(m) {
        assert!(is_solvable(&next));
        b = next;
      }
    }
  }
}
