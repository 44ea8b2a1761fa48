//! Houses: the 27 constraint groups of the board.

use std::fmt::{self, Display};

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// Every cell belongs to exactly three houses, and a solved board holds each
/// digit exactly once per house. Houses identify where a constraint violation
/// lives, e.g. in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = [
        Self::Row { row: 0 },
        Self::Row { row: 1 },
        Self::Row { row: 2 },
        Self::Row { row: 3 },
        Self::Row { row: 4 },
        Self::Row { row: 5 },
        Self::Row { row: 6 },
        Self::Row { row: 7 },
        Self::Row { row: 8 },
    ];

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = [
        Self::Column { col: 0 },
        Self::Column { col: 1 },
        Self::Column { col: 2 },
        Self::Column { col: 3 },
        Self::Column { col: 4 },
        Self::Column { col: 5 },
        Self::Column { col: 6 },
        Self::Column { col: 7 },
        Self::Column { col: 8 },
    ];

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = [
        Self::Box { index: 0 },
        Self::Box { index: 1 },
        Self::Box { index: 2 },
        Self::Box { index: 3 },
        Self::Box { index: 4 },
        Self::Box { index: 5 },
        Self::Box { index: 6 },
        Self::Box { index: 7 },
        Self::Box { index: 8 },
    ];

    /// Array containing all houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { row } => Position::new(row, i),
            House::Column { col } => Position::new(i, col),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns all positions contained in this house.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            self.position_from_cell_index(i)
        })
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { row } => write!(f, "row {row}"),
            House::Column { col } => write!(f, "column {col}"),
            House::Box { index } => write!(f, "box {index}"),
        }
    }
}
