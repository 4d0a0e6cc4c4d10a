use std::env;
use std::fs;
use std::path::Path;
use std::process;
use tile_solve::core::Board;
use tile_solve::parity::is_solvable;
use tile_solve::solve::solve;

/// Reads a puzzle from the input file, solves it, and writes the five-line
/// report (path length, path, visited, created, updated) to the output
/// file.  An unsolvable board gets a notice on stdout and no output file.
fn main() {
  let args: Vec<String> = env::args().collect();
  if args.len() != 3 {
    eprintln!("usage: {} <input-file> <output-file>", args[0]);
    process::exit(2);
  }
  let (input, output) = (&args[1], &args[2]);

  let text = fs::read_to_string(input)
    .unwrap_or_else(|e| fatal(&format!("cannot read {}: {}", input, e)));
  // A pre-existing output file must be removable before any search runs;
  // the file itself is only written on success.
  if Path::new(output).exists() {
    if let Err(e) = fs::remove_file(output) {
      fatal(&format!("cannot delete {}: {}", output, e));
    }
  }
  let board: Board = text
    .parse()
    .unwrap_or_else(|e| fatal(&format!("bad puzzle in {}: {}", input, e)));

  if !is_solvable(&board) {
    println!("Board is not solvable!");
    return;
  }

  let summary = solve(&board).unwrap_or_else(|e| fatal(&e.to_string()));
  if let Err(e) = fs::write(output, summary.to_string()) {
    fatal(&format!("cannot write {}: {}", output, e));
  }
}

fn fatal(message: &str) -> ! {
  eprintln!("{}", message);
  process::exit(1);
}
