//! A set of sudoku digits, optimized for constraint tracking.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

use crate::Digit;

/// A set of [`Digit`]s backed by a 9-bit mask.
///
/// Bits 0-8 of the mask stand for digits 1-9, so membership tests, insertion,
/// and removal are single bit operations. This is the representation used for
/// the per-row, per-column, and per-box used-digit sets during solving.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, DigitSet};
///
/// let mut used = DigitSet::new();
/// used.insert(Digit::D4);
/// used.insert(Digit::D9);
///
/// assert!(used.contains(Digit::D4));
/// assert!(!used.contains(Digit::D1));
/// assert_eq!(used.len(), 2);
/// ```
///
/// # Set operations
///
/// ```
/// use nanpure_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_elem(Digit::D1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

const MASK: u16 = 0x01ff;

const fn bit(digit: Digit) -> u16 {
    1 << (digit.value() - 1)
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(bit(digit))
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & bit(digit) != 0
    }

    /// Inserts a digit, returning `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let inserted = !self.contains(digit);
        self.0 |= bit(digit);
        inserted
    }

    /// Removes a digit, returning `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let removed = self.contains(digit);
        self.0 &= !bit(digit);
        removed
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the digits present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the digits present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0 & MASK)
    }

    /// Iterates over the digits in the set in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        assert!(set.insert(Digit::D1));
        assert!(set.insert(Digit::D9));
        assert!(!set.insert(Digit::D1));

        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);

        assert!(set.remove(Digit::D1));
        assert!(!set.remove(Digit::D1));
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5, Digit::D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_set_operations() {
        let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
        let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);

        assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
        assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
        assert_eq!(a.difference(b), DigitSet::from_elem(Digit::D1));
        assert_eq!(DigitSet::FULL.difference(DigitSet::FULL), DigitSet::EMPTY);
    }

    #[test]
    fn test_debug_shows_digit_values() {
        let set = DigitSet::from_iter([Digit::D2, Digit::D7]);
        assert_eq!(format!("{set:?}"), "{2, 7}");
    }

    proptest! {
        #[test]
        fn test_matches_btree_set_model(values in proptest::collection::vec(1u8..=9, 0..30)) {
            let mut set = DigitSet::new();
            let mut model = BTreeSet::new();

            for &value in &values {
                let digit = Digit::from_value(value);
                prop_assert_eq!(set.insert(digit), model.insert(digit));
            }

            prop_assert_eq!(set.len(), model.len());
            let collected: Vec<_> = set.iter().collect();
            let expected: Vec<_> = model.iter().copied().collect();
            prop_assert_eq!(collected, expected);

            for &value in &values {
                let digit = Digit::from_value(value);
                prop_assert_eq!(set.remove(digit), model.remove(&digit));
            }
            prop_assert!(set.is_empty());
        }
    }
}
