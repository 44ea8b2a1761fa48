//! Example demonstrating how to solve a puzzle from the command line.
//!
//! The puzzle is given as grid text: 81 cells in row-major order, digits
//! `1`-`9` for filled cells and `.`, `_`, or `0` for empty ones. Whitespace
//! is ignored.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve -- \
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//! ```

use std::process;

use clap::Parser;
use nanpure_core::Grid;
use nanpure_solver::PuzzleSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as grid text (digits for clues, `.`/`_`/`0` for empty cells).
    #[arg(value_name = "PUZZLE")]
    puzzle: String,
}

fn main() {
    let args = Args::parse();

    let grid = match args.puzzle.parse::<Grid>() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    let mut solver = match PuzzleSolver::new(grid.clone()) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    println!("Problem:");
    println!("  {grid}");
    println!();

    match solver.solve() {
        Ok(solution) => {
            println!("Solution:");
            println!("  {solution}");
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
