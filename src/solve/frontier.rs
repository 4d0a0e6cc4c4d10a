//! Defines the open frontier: a binary min-heap of boards with a position
//! index keyed by board, so an open entry's priority can be updated in
//! place instead of scanning for it.

use crate::core::Board;
use std::collections::HashMap;

/// Extraction order: lowest f first, then lowest g, then the entry keyed
/// earliest.  The sequence component makes extraction fully deterministic.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct Key {
  f: u32,
  g: u32,
  seq: u64,
}

struct Entry {
  board: Board,
  key: Key,
}

pub struct Frontier {
  entries: Vec<Entry>,
  /// Each open board's position in `entries`.
  slots: HashMap<Board, usize>,
  keyed: u64,
}

impl Frontier {
  pub fn new() -> Frontier {
    Frontier {
      entries: Vec::new(),
      slots: HashMap::new(),
      keyed: 0,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Inserts `board` with the given scores, or re-keys its existing open
  /// entry.
  pub fn insert(&mut self, board: Board, f: u32, g: u32) {
    let key = Key {
      f,
      g,
      seq: self.keyed,
    };
    self.keyed += 1;
    if let Some(&slot) = self.slots.get(&board) {
      self.entries[slot].key = key;
      let slot = self.sift_up(slot);
      self.sift_down(slot);
    } else {
      let slot = self.entries.len();
      self.slots.insert(board.clone(), slot);
      self.entries.push(Entry { board, key });
      self.sift_up(slot);
    }
  }

  /// Removes and returns the board with the smallest key.
  pub fn pop(&mut self) -> Option<Board> {
    if self.is_empty() {
      return None;
    }
    let last = self.entries.len() - 1;
    self.swap(0, last);
    let entry = self.entries.pop().unwrap(); // non-empty just checked
    self.slots.remove(&entry.board);
    if !self.entries.is_empty() {
      self.sift_down(0);
    }
    Some(entry.board)
  }

  /// Moves the entry at `slot` toward the root while it beats its parent;
  /// returns its final position.
  fn sift_up(&mut self, mut slot: usize) -> usize {
    while slot > 0 {
      let parent = (slot - 1) / 2;
      if self.entries[slot].key >= self.entries[parent].key {
        break;
      }
      self.swap(slot, parent);
      slot = parent;
    }
    slot
  }

  /// Moves the entry at `slot` away from the root while a child beats it.
  fn sift_down(&mut self, mut slot: usize) {
    loop {
      let mut least = slot;
      for child in [2 * slot + 1, 2 * slot + 2] {
        if child < self.entries.len() && self.entries[child].key < self.entries[least].key {
          least = child;
        }
      }
      if least == slot {
        break;
      }
      self.swap(slot, least);
      slot = least;
    }
  }

  fn swap(&mut self, a: usize, b: usize) {
    self.entries.swap(a, b);
    // The slots map always holds both boards already.
    *self.slots.get_mut(&self.entries[a].board).unwrap() = a;
    *self.slots.get_mut(&self.entries[b].board).unwrap() = b;
  }
}
