use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::env;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tile_solve::gen::random_board;

/// Prints a random solvable puzzle in the solver's input format: the side
/// length, then the tile rows.  An optional seed makes the output
/// reproducible.
fn main() {
  let args: Vec<String> = env::args().collect();
  if args.len() < 2 || args.len() > 3 {
    eprintln!("usage: {} <side> [seed]", args[0]);
    process::exit(2);
  }
  let side: usize = args[1].parse().unwrap_or_else(|_| {
    eprintln!("side (`{}`) must be a whole number", args[1]);
    process::exit(2);
  });
  let seed: u64 = match args.get(2) {
    Some(s) => s.parse().unwrap_or_else(|_| {
      eprintln!("seed (`{}`) must be a whole number", s);
      process::exit(2);
    }),
    // Fall back to the clock for a fresh puzzle per run.
    None => SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|d| d.as_nanos() as u64)
      .unwrap_or(0),
  };
  let mut rng = Pcg64Mcg::seed_from_u64(seed);
  print!("{}", random_board(side, &mut rng));
}
