//! The 9×9 digit grid and its input conversions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, DigitSet, House, Position};

/// Errors describing a malformed input grid.
///
/// All variants are detected eagerly, before any solving starts: the
/// conversion constructors on [`Grid`] report shape, range, and character
/// problems, and solver construction reports duplicate digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidGrid {
    /// Flat input did not contain exactly 81 cells.
    #[display("expected 81 cells, got {len}")]
    WrongCellCount {
        /// Number of cells found.
        len: usize,
    },
    /// Nested input did not contain exactly 9 rows.
    #[display("expected 9 rows, got {len}")]
    WrongRowCount {
        /// Number of rows found.
        len: usize,
    },
    /// A row of nested input did not contain exactly 9 cells.
    #[display("expected 9 cells in row {row}, got {len}")]
    WrongRowLength {
        /// Row index (0-8) of the offending row.
        row: usize,
        /// Number of cells found in that row.
        len: usize,
    },
    /// Grid text contained a character that is not a digit, `.`, or `_`.
    #[display("unexpected character {ch:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
    /// A cell held a value outside the range 0-9.
    #[display("cell value {value} out of range at {pos:?}")]
    ValueOutOfRange {
        /// Position of the offending cell.
        pos: Position,
        /// The offending value.
        value: u8,
    },
    /// A digit appeared more than once in a single row, column, or box.
    #[display("duplicate digit {digit} in {house}")]
    DuplicateDigit {
        /// The repeated digit.
        digit: Digit,
        /// The house in which the repetition was detected.
        house: House,
    },
}

/// A 9×9 grid of optional digits, stored row-major.
///
/// `Grid` is plain data: it can hold any placement of digits, including
/// placements that violate Sudoku rules. Consistency is checked when a solver
/// is constructed from the grid, not here.
///
/// # Text format
///
/// [`FromStr`] accepts the usual puzzle literal format:
///
/// - digits 1-9 represent filled cells
/// - `.`, `_`, or `0` represent empty cells
/// - whitespace is ignored
///
/// [`Display`] renders the grid as a single 81-character line with `_` for
/// empty cells; the output parses back to an equal grid.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, Grid, Position};
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
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 2)), None);
/// # Ok::<(), nanpure_core::InvalidGrid>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid from a flat slice of 81 cell values, row-major.
    ///
    /// Values 1-9 are digits; 0 is an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGrid::WrongCellCount`] if the slice does not hold
    /// exactly 81 values, or [`InvalidGrid::ValueOutOfRange`] if any value is
    /// greater than 9.
    pub fn from_cells(cells: &[u8]) -> Result<Self, InvalidGrid> {
        if cells.len() != 81 {
            return Err(InvalidGrid::WrongCellCount { len: cells.len() });
        }
        let mut grid = Self::new();
        for (i, &value) in cells.iter().enumerate() {
            grid.cells[i] = cell_from_value(Position::from_index(i), value)?;
        }
        Ok(grid)
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Writes `digit` into the cell at `pos`.
    #[inline]
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Empties the cell at `pos`.
    #[inline]
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the set of digits currently placed in `house`.
    ///
    /// Repeated digits collapse into one set member; use a solver to detect
    /// repetitions.
    #[must_use]
    pub fn digits_in(&self, house: House) -> DigitSet {
        house
            .positions()
            .into_iter()
            .filter_map(|pos| self.get(pos))
            .collect()
    }

    /// Returns `true` if the grid is completely filled and every row, column,
    /// and box contains each digit 1-9 exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete()
            && House::ALL
                .into_iter()
                .all(|house| self.digits_in(house) == DigitSet::FULL)
    }

    /// Converts the grid into nested rows of cell values, with 0 for empty
    /// cells.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| self.cells[row * 9 + col].map_or(0, Digit::value))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_from_value(pos: Position, value: u8) -> Result<Option<Digit>, InvalidGrid> {
    if value == 0 {
        return Ok(None);
    }
    match Digit::try_from_value(value) {
        Some(digit) => Ok(Some(digit)),
        None => Err(InvalidGrid::ValueOutOfRange { pos, value }),
    }
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = InvalidGrid;

    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, InvalidGrid> {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let value = rows[usize::from(pos.row())][usize::from(pos.col())];
            grid.cells[pos.index()] = cell_from_value(pos, value)?;
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = InvalidGrid;

    fn from_str(s: &str) -> Result<Self, InvalidGrid> {
        let mut grid = Self::new();
        let mut len = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch as u8 - b'0';
                    Digit::try_from_value(value)
                }
                _ => return Err(InvalidGrid::UnexpectedCharacter { ch }),
            };
            if len < 81 {
                grid.cells[len] = cell;
            }
            len += 1;
        }
        if len != 81 {
            return Err(InvalidGrid::WrongCellCount { len });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_str("_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const WIKIPEDIA_PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const SOLVED: &str =
        "123456789456789123789123456214365897365897214897214365531642978642978531978531642";

    #[test]
    fn test_from_str_parses_puzzle_literals() {
        let grid: Grid = WIKIPEDIA_PUZZLE.parse().unwrap();

        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(0, 1)), Some(Digit::D3));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.get(Position::new(4, 4)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));

        let filled = Position::ALL
            .into_iter()
            .filter(|&pos| grid.get(pos).is_some())
            .count();
        assert_eq!(filled, 30);
    }

    #[test]
    fn test_from_str_empty_cell_markers_are_equivalent() {
        let dots: Grid = ".".repeat(81).parse().unwrap();
        let zeros: Grid = "0".repeat(81).parse().unwrap();
        let underscores: Grid = "_".repeat(81).parse().unwrap();

        assert_eq!(dots, Grid::new());
        assert_eq!(zeros, Grid::new());
        assert_eq!(underscores, Grid::new());
    }

    #[test]
    fn test_from_str_rejects_unexpected_character() {
        let err = "x".repeat(81).parse::<Grid>().unwrap_err();
        assert_eq!(err, InvalidGrid::UnexpectedCharacter { ch: 'x' });
    }

    #[test]
    fn test_from_str_rejects_wrong_cell_count() {
        let err = ".".repeat(80).parse::<Grid>().unwrap_err();
        assert_eq!(err, InvalidGrid::WrongCellCount { len: 80 });

        let err = ".".repeat(82).parse::<Grid>().unwrap_err();
        assert_eq!(err, InvalidGrid::WrongCellCount { len: 82 });
    }

    #[test]
    fn test_from_cells() {
        let grid = Grid::from_cells(&[0; 81]).unwrap();
        assert_eq!(grid, Grid::new());

        let err = Grid::from_cells(&[0; 80]).unwrap_err();
        assert_eq!(err, InvalidGrid::WrongCellCount { len: 80 });

        let mut cells = [0; 81];
        cells[5] = 10;
        let err = Grid::from_cells(&cells).unwrap_err();
        assert_eq!(
            err,
            InvalidGrid::ValueOutOfRange {
                pos: Position::new(0, 5),
                value: 10,
            }
        );
    }

    #[test]
    fn test_try_from_rows_round_trips() {
        let grid: Grid = WIKIPEDIA_PUZZLE.parse().unwrap();
        let rows = grid.to_rows();
        assert_eq!(rows[0], [5, 3, 0, 0, 7, 0, 0, 0, 0]);
        assert_eq!(Grid::try_from(rows).unwrap(), grid);
    }

    #[test]
    fn test_try_from_rows_rejects_out_of_range_value() {
        let mut rows = [[0; 9]; 9];
        rows[1][2] = 12;
        let err = Grid::try_from(rows).unwrap_err();
        assert_eq!(
            err,
            InvalidGrid::ValueOutOfRange {
                pos: Position::new(1, 2),
                value: 12,
            }
        );
    }

    #[test]
    fn test_display_round_trips() {
        let grid: Grid = WIKIPEDIA_PUZZLE.parse().unwrap();
        let text = grid.to_string();
        assert_eq!(text.len(), 81);
        assert!(text.starts_with("53__7_"));
        assert_eq!(text.parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn test_place_clear_get() {
        let mut grid = Grid::new();
        let pos = Position::new(4, 7);

        grid.place(pos, Digit::D6);
        assert_eq!(grid.get(pos), Some(Digit::D6));

        grid.clear(pos);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_digits_in() {
        let grid: Grid = WIKIPEDIA_PUZZLE.parse().unwrap();

        assert_eq!(
            grid.digits_in(House::Row { row: 0 }),
            DigitSet::from_iter([Digit::D3, Digit::D5, Digit::D7])
        );
        assert_eq!(
            grid.digits_in(House::Column { col: 0 }),
            DigitSet::from_iter([Digit::D4, Digit::D5, Digit::D6, Digit::D7, Digit::D8])
        );
        assert_eq!(
            grid.digits_in(House::Box { index: 0 }),
            DigitSet::from_iter([Digit::D3, Digit::D5, Digit::D6, Digit::D8, Digit::D9])
        );
    }

    #[test]
    fn test_is_solved() {
        let solved: Grid = SOLVED.parse().unwrap();
        assert!(solved.is_complete());
        assert!(solved.is_solved());

        // A complete grid with a repeated digit is not solved.
        let mut tampered = solved.clone();
        tampered.place(Position::new(0, 0), Digit::D2);
        assert!(tampered.is_complete());
        assert!(!tampered.is_solved());

        let incomplete: Grid = WIKIPEDIA_PUZZLE.parse().unwrap();
        assert!(!incomplete.is_solved());
    }

    proptest! {
        #[test]
        fn test_text_round_trip(values in proptest::collection::vec(0u8..=9, 81)) {
            let grid = Grid::from_cells(&values).unwrap();
            let text = grid.to_string();
            prop_assert_eq!(text.len(), 81);
            prop_assert_eq!(text.parse::<Grid>().unwrap(), grid);
        }

        #[test]
        fn test_rows_round_trip(values in proptest::collection::vec(0u8..=9, 81)) {
            let grid = Grid::from_cells(&values).unwrap();
            prop_assert_eq!(Grid::try_from(grid.to_rows()).unwrap(), grid);
        }
    }
}
