//! Exhaustive backtracking search over a single owned puzzle state.

use nanpure_core::{Digit, DigitSet, Grid, House, InvalidGrid, Position};

/// The puzzle is well-formed but has no valid completion.
///
/// This is a negative result, not a defect: it is produced only after the
/// entire search space rooted at the initial grid has been exhausted. Callers
/// must handle it explicitly; it is never folded into a partially filled
/// grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no solution exists for the given puzzle")]
pub struct NoSolution;

/// An exhaustive backtracking solver owning one puzzle's state.
///
/// The solver holds the grid together with one used-digit set per row,
/// column, and box. The sets mirror the grid contents exactly at every step:
/// each placement inserts the digit into the three owning sets, each
/// retraction removes it, so legality checks are one bitset lookup per house.
///
/// Search order is fully specified and deterministic: cells are filled first
/// empty first in row-major order, candidates are tried in ascending digit
/// order, and the first completion found is returned. Solving a puzzle with
/// several completions therefore always yields the same one.
///
/// Each solver instance is independent; to run many solves concurrently,
/// give every solve its own instance.
///
/// # Examples
///
/// ```
/// use nanpure_core::Grid;
/// use nanpure_solver::PuzzleSolver;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let mut solver = PuzzleSolver::new(grid)?;
/// let solution = solver.solve()?;
/// assert!(solution.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSolver {
    grid: Grid,
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
}

impl PuzzleSolver {
    /// Creates a solver for `grid`, building the row, column, and box
    /// used-digit sets from its filled cells.
    ///
    /// Cells are scanned once in row-major order. For each filled cell the
    /// owning row set is checked first, then the column set, then the box
    /// set; the first digit already present fails construction.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGrid::DuplicateDigit`] naming the digit and the house
    /// where the first collision was found.
    pub fn new(grid: Grid) -> Result<Self, InvalidGrid> {
        let mut solver = Self {
            grid,
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
        };
        for pos in Position::ALL {
            let Some(digit) = solver.grid.get(pos) else {
                continue;
            };
            if solver.rows[usize::from(pos.row())].contains(digit) {
                return Err(InvalidGrid::DuplicateDigit {
                    digit,
                    house: House::Row { row: pos.row() },
                });
            }
            if solver.cols[usize::from(pos.col())].contains(digit) {
                return Err(InvalidGrid::DuplicateDigit {
                    digit,
                    house: House::Column { col: pos.col() },
                });
            }
            if solver.boxes[usize::from(pos.box_index())].contains(digit) {
                return Err(InvalidGrid::DuplicateDigit {
                    digit,
                    house: House::Box {
                        index: pos.box_index(),
                    },
                });
            }
            solver.insert_digit(pos, digit);
        }
        Ok(solver)
    }

    /// Fills all empty cells and returns the solved grid.
    ///
    /// On success the solver keeps the solved grid, so solving again returns
    /// the same grid immediately. On failure every tentative placement has
    /// been retracted: the grid and all three set collections are exactly as
    /// they were before the call.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolution`] if no assignment of the empty cells satisfies
    /// all constraints.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::Grid;
    /// use nanpure_solver::PuzzleSolver;
    ///
    /// let mut solver = PuzzleSolver::new(Grid::new())?;
    /// let solution = solver.solve()?;
    /// assert!(solution.is_solved());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn solve(&mut self) -> Result<Grid, NoSolution> {
        if self.search() {
            Ok(self.grid.clone())
        } else {
            Err(NoSolution)
        }
    }

    /// Returns the solver's current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Depth-first search from the current state. Returns `true` once the
    /// grid is complete; on `false` the state is unchanged.
    fn search(&mut self) -> bool {
        let Some(pos) = self.first_empty() else {
            return true;
        };
        for digit in Digit::ALL {
            if !self.is_legal(pos, digit) {
                continue;
            }
            self.place(pos, digit);
            if self.search() {
                return true;
            }
            self.unplace(pos, digit);
        }
        false
    }

    fn first_empty(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| self.grid.get(pos).is_none())
    }

    fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        !self.rows[usize::from(pos.row())].contains(digit)
            && !self.cols[usize::from(pos.col())].contains(digit)
            && !self.boxes[usize::from(pos.box_index())].contains(digit)
    }

    fn place(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.grid.get(pos).is_none());
        self.grid.place(pos, digit);
        self.insert_digit(pos, digit);
    }

    fn unplace(&mut self, pos: Position, digit: Digit) {
        debug_assert_eq!(self.grid.get(pos), Some(digit));
        self.grid.clear(pos);
        self.remove_digit(pos, digit);
    }

    fn insert_digit(&mut self, pos: Position, digit: Digit) {
        let row_changed = self.rows[usize::from(pos.row())].insert(digit);
        let col_changed = self.cols[usize::from(pos.col())].insert(digit);
        let box_changed = self.boxes[usize::from(pos.box_index())].insert(digit);
        debug_assert!(row_changed && col_changed && box_changed);
    }

    fn remove_digit(&mut self, pos: Position, digit: Digit) {
        let row_changed = self.rows[usize::from(pos.row())].remove(digit);
        let col_changed = self.cols[usize::from(pos.col())].remove(digit);
        let box_changed = self.boxes[usize::from(pos.box_index())].remove(digit);
        debug_assert!(row_changed && col_changed && box_changed);
    }
}
