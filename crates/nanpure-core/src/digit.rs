//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// The enum makes out-of-range digits unrepresentable; empty cells are
/// modelled separately as `Option<Digit>` (see [`Grid`]).
///
/// [`Grid`]: crate::Grid
///
/// # Examples
///
/// ```
/// use nanpure_core::Digit;
///
/// let digit = Digit::try_from_value(7).unwrap();
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
/// assert_eq!(Digit::try_from_value(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits from 1 to 9 in ascending order.
    ///
    /// The order of this array is the candidate order used by search code,
    /// so it must stay strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 9);
    /// assert_eq!(Digit::ALL[0], Digit::D1);
    /// assert_eq!(Digit::ALL[8], Digit::D9);
    /// ```
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9, or `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(1), Some(Digit::D1));
    /// assert_eq!(Digit::try_from_value(9), Some(Digit::D9));
    /// assert_eq!(Digit::try_from_value(10), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from a value known to be in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Use
    /// [`try_from_value`](Self::try_from_value) for untrusted input.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Some(digit) => digit,
            None => panic!("Invalid digit value: {value}"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::Digit;
    ///
    /// assert_eq!(Digit::D5.value(), 5);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
