//! Sudoku solved by MRV backtracking

use classical_search::{problems::Sudoku, BacktrackingSolver, SearchError};

const PUZZLE: &str =
    "8..........36......7..9.2...5...7.......457.....1...3...1....68..85...1..9....4..";

fn main() -> Result<(), SearchError> {
    env_logger::init();

    // Optional puzzle on the command line
    let input = std::env::args().nth(1).unwrap_or_else(|| PUZZLE.to_string());
    let mut puzzle = Sudoku::parse(&input)?;

    println!("Initial puzzle:");
    println!("{}", puzzle);

    let mut solver = BacktrackingSolver::default();
    println!("Solving...");

    if solver.solve(&mut puzzle) {
        println!("Solved puzzle:");
        println!("{}", puzzle);
    } else {
        println!("Failed to solve.");
    }
    println!("{}", solver.statistics().summary());

    Ok(())
}
