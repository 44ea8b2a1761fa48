//! Core data structures for the nanpure sudoku solver.
//!
//! This crate provides the grid representation shared by the solving and
//! serving components, together with the conversions callers need to get
//! puzzles in and out of it.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: bitset of digits, the used-digit tracking structure
//! - [`position`]: (row, column) cell addressing
//! - [`house`]: rows, columns, and boxes as constraint groups
//! - [`grid`]: the 9×9 grid, its text format, array conversions, and the
//!   [`InvalidGrid`] error kind
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.place(Position::new(0, 0), Digit::D5);
//!
//! assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
//! assert!(!grid.is_complete());
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, InvalidGrid},
    house::House,
    position::Position,
};
