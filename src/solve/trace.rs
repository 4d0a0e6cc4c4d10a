//! Reconstructs the solution move string from recorded parent links.

use crate::core::{Board, Move};
use std::collections::HashMap;

/// Walks parent links back from `goal` until it reaches the one board with
/// no parent (the start), then returns the move letters in start→goal
/// order.  An unparented `goal` yields the empty string.
pub(super) fn trace_path(goal: &Board, parents: &HashMap<Board, Board>) -> String {
  let mut letters = Vec::new();
  let mut current = goal;
  while let Some(parent) = parents.get(current) {
    letters.push(step_letter(parent, current));
    current = parent;
  }
  letters.reverse();
  letters.into_iter().collect()
}

/// The letter for one step: the direction the empty slot moved going from
/// parent to child, inferred from the difference of their empty-slot
/// indices.
fn step_letter(parent: &Board, child: &Board) -> char {
  let delta = child.empty_index() as isize - parent.empty_index() as isize;
  let step = Move::ALL
    .into_iter()
    .find(|m| m.delta(parent.side()) == delta)
    .unwrap(); // Safe because parent links only join a board to one of its slides.
  step.letter()
}
