//! Generates random solvable boards.

use crate::core::{Board, MAX_SIDE};
use crate::parity::is_solvable;
use rand::seq::SliceRandom;
use rand::Rng;

/// Makes a uniformly random solvable board of the given side: shuffles the
/// tile permutation until it passes the parity gate, which accepts half of
/// all permutations.
pub fn random_board<R: Rng>(side: usize, rng: &mut R) -> Board {
  assert!((2..=MAX_SIDE).contains(&side), "side {} out of range", side);
  let mut tiles: Vec<u8> = (0..side * side).map(|t| t as u8).collect();
  loop {
    tiles.shuffle(rng);
    // A shuffled permutation is always a legal board.
    let board = Board::new(tiles.clone()).unwrap();
    if is_solvable(&board) {
      return board;
    }
  }
}
