//! Exhaustive backtracking solver for number-place puzzles.
//!
//! [`PuzzleSolver`] fills the empty cells of a [`nanpure_core::Grid`] by
//! depth-first search with incremental row, column, and box constraint sets.
//! The search order is deterministic, so a puzzle with several solutions
//! always yields the same one.

pub use self::solver::*;

mod solver;
