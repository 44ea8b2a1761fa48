//! Board position (row, column) addressing.

/// A cell address on the 9×9 board.
///
/// Cells are addressed by `(row, col)`, both in the range 0-8, with row 0 at
/// the top and column 0 on the left.
///
/// # Examples
///
/// ```
/// use nanpure_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order (row 0-8, column 0-8 within each
    /// row).
    ///
    /// This order defines what "the first empty cell" means for code that
    /// scans the board, so it must stay row-major.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates the position of cell `i` within the box `box_index`.
    ///
    /// Boxes are numbered 0-8 left to right, top to bottom, and so are the
    /// cells within a box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        Self::new((box_index / 3) * 3 + i / 3, (box_index % 3) * 3 + i % 3)
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = ((index / 9) as u8, (index % 9) as u8);
        Self::new(row, col)
    }

    /// Returns the row index (0-8).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the row-major cell index (0-80) of this position.
    #[must_use]
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.row) * 9 + usize::from(self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(0, 8));
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));

        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), pos);
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(2, 3).box_index(), 1);
        assert_eq!(Position::new(3, 2).box_index(), 3);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_from_box_round_trip() {
        for box_index in 0..9 {
            for i in 0..9 {
                let pos = Position::from_box(box_index, i);
                assert_eq!(pos.box_index(), box_index);
            }
        }

        // Box 4 is the center block, rows 3-5, cols 3-5.
        assert_eq!(Position::from_box(4, 0), Position::new(3, 3));
        assert_eq!(Position::from_box(4, 8), Position::new(5, 5));
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_row_out_of_range() {
        let _ = Position::new(9, 0);
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_col_out_of_range() {
        let _ = Position::new(0, 9);
    }
}
