//! Defines the best-first search that solves a board.
//!
//! This is A* over the board graph with unit move costs, using the doubled
//! Manhattan estimate from [`crate::heuristic`].  Callers are expected to
//! gate the search behind [`crate::parity::is_solvable`]; a board that
//! fails the gate drains the frontier and comes back as [`Exhausted`].

use crate::core::Board;
use crate::heuristic::Estimator;
use std::collections::{HashMap, HashSet};
use std::fmt;

mod frontier;
mod trace;

use frontier::Frontier;

/// The outcome of one search: the solution and its statistics.
pub struct SolveSummary {
  /// The moves from start to goal, one letter (`L`/`R`/`U`/`D`) per slide
  /// of the empty slot.  Its length is the goal's finalized path cost.
  pub path: String,
  /// How many boards were popped from the frontier.
  pub visited: u32,
  /// How many boards entered the frontier for the first time.
  pub created: u32,
  /// How many open boards had their provisional cost improved.
  pub updated: u32,
}

impl fmt::Display for SolveSummary {
  /// Prints the five-line report: path length, path, then the visited,
  /// created, and updated counters.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", self.path.len())?;
    writeln!(f, "{}", self.path)?;
    writeln!(f, "{}", self.visited)?;
    writeln!(f, "{}", self.created)?;
    writeln!(f, "{}", self.updated)
  }
}

/// Marker error for a search that drained its frontier without reaching
/// the goal, which only happens when the parity gate was skipped or wrong.
#[derive(Debug)]
pub struct Exhausted;

impl fmt::Display for Exhausted {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("search exhausted the frontier without reaching the goal")
  }
}

impl std::error::Error for Exhausted {}

/// Searches for a path from `start` to the goal board of the same side.
///
/// Every search owns fresh state: the open frontier, the closed set, the
/// cost and parent maps, and the heuristic cache all live exactly as long
/// as this call.
pub fn solve(start: &Board) -> Result<SolveSummary, Exhausted> {
  let goal = Board::goal(start.side());
  let mut estimator = Estimator::new();
  let mut open = Frontier::new();
  let mut closed: HashSet<Board> = HashSet::new();
  let mut g_scores: HashMap<Board, u32> = HashMap::new();
  let mut parents: HashMap<Board, Board> = HashMap::new();
  let (mut visited, mut created, mut updated) = (0, 0, 0);

  g_scores.insert(start.clone(), 0);
  let h = estimator.estimate(start);
  open.insert(start.clone(), h, 0);

  while let Some(current) = open.pop() {
    visited += 1;
    if current == goal {
      return Ok(SolveSummary {
        path: trace::trace_path(&goal, &parents),
        visited,
        created,
        updated,
      });
    }
    let current_g = g_scores[&current];
    closed.insert(current.clone());

    for next in current.neighbors() {
      if closed.contains(&next) {
        continue;
      }
      let tentative = current_g + 1;
      let prior = g_scores.get(&next).copied();
      if prior.is_some_and(|g| tentative >= g) {
        continue;
      }
      parents.insert(next.clone(), current.clone());
      if prior.is_some() {
        // A cheaper route to a board that is still open.
        updated += 1;
      } else {
        created += 1;
      }
      g_scores.insert(next.clone(), tentative);
      let f = tentative + estimator.estimate(&next);
      open.insert(next, f, tentative);
    }
  }
  Err(Exhausted)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::gen::random_board;
  use crate::parity::is_solvable;
  use paste::paste;
  use rand::SeedableRng;
  use rand_pcg::Pcg64Mcg;
  use std::collections::VecDeque;

  fn board(tiles: &[u8]) -> Board {
    Board::new(tiles.to_vec()).unwrap()
  }

  macro_rules! solve_test {
    ($name:ident, $tiles:expr, $path:expr, $counters:expr) => {
      paste! {
          #[test]
          fn [<test_solve_ $name>]() {
              let start = board(&$tiles);
              assert!(is_solvable(&start));
              let summary = solve(&start).unwrap();
              assert_eq!($path, summary.path);
              let (visited, created, updated) = $counters;
              assert_eq!(visited, summary.visited);
              assert_eq!(created, summary.created);
              assert_eq!(updated, summary.updated);
              assert_eq!(
                  Some(Board::goal(start.side())),
                  start.apply_path(&summary.path)
              );
          }
      }
    };
  }

  solve_test!(already_solved, [1, 2, 3, 4, 5, 6, 7, 8, 0], "", (1, 0, 0));
  solve_test!(two_moves, [1, 2, 3, 4, 0, 6, 7, 5, 8], "DR", (3, 6, 0));
  solve_test!(
    one_move_4x4,
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15],
    "R",
    (2, 3, 0)
  );

  #[test]
  fn report_prints_five_lines() {
    let summary = solve(&board(&[1, 2, 3, 4, 0, 6, 7, 5, 8])).unwrap();
    assert_eq!("2\nDR\n3\n6\n0\n", summary.to_string());
  }

  #[test]
  fn unsolvable_board_exhausts_the_frontier() {
    let start = board(&[2, 1, 3, 0]);
    assert!(!is_solvable(&start));
    assert!(solve(&start).is_err());
  }

  /// Shortest distances from the goal to every reachable board, by BFS.
  fn distances_from_goal(side: usize) -> HashMap<Board, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(Board::goal(side), 0);
    queue.push_back(Board::goal(side));
    while let Some(b) = queue.pop_front() {
      let d = dist[&b];
      for n in b.neighbors() {
        if !dist.contains_key(&n) {
          dist.insert(n.clone(), d + 1);
          queue.push_back(n);
        }
      }
    }
    dist
  }

  #[test]
  fn audit_against_brute_force_on_2x2() {
    // The doubled heuristic is inadmissible, so the reported length is
    // only guaranteed to be an upper bound on the true optimum.  Audit
    // every solvable 2×2 board: the path must replay to the goal and can
    // never beat the BFS distance.
    let dist = distances_from_goal(2);
    for (b, &d) in &dist {
      let summary = solve(b).unwrap();
      assert_eq!(Some(Board::goal(2)), b.apply_path(&summary.path));
      assert!(summary.path.len() >= d);
      assert!(summary.visited <= summary.created + summary.updated + 1);
    }
  }

  #[test]
  fn audit_against_brute_force_on_random_3x3() {
    let dist = distances_from_goal(3);
    let mut rng = Pcg64Mcg::seed_from_u64(20260831);
    for _ in 0..10 {
      let b = random_board(3, &mut rng);
      let summary = solve(&b).unwrap();
      assert_eq!(Some(Board::goal(3)), b.apply_path(&summary.path));
      assert!(summary.path.len() >= dist[&b]);
      assert!(summary.visited <= summary.created + summary.updated + 1);
    }
  }
}
