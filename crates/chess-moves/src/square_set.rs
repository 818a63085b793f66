//! A set of squares packed into 64 bits.
//!
//! Bit 0 = A1, bit 1 = B1, ..., bit 63 = H8, matching [`Square::index`].

use chess_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A set of distinct squares.
///
/// Iteration is in ascending square order (A1, B1, ..., H8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// The empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Every square on the board.
    pub const FULL: SquareSet = SquareSet(!0);

    /// Creates a set holding a single square.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1u64 << sq.index())
    }

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if `sq` is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Adds `sq`; returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, sq: Square) -> bool {
        let was_present = self.contains(sq);
        self.0 |= 1u64 << sq.index();
        !was_present
    }

    /// Removes `sq`; returns true if it was present.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> bool {
        let was_present = self.contains(sq);
        self.0 &= !(1u64 << sq.index());
        was_present
    }

    /// Pops and returns the lowest square.
    #[inline]
    fn pop_first(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Square::from_index(index)
        }
    }

    /// Iterates over the squares in ascending order.
    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }

    /// Returns the squares' notations joined with `separator`.
    pub fn join(self, separator: &str) -> String {
        self.iter()
            .map(Square::notation)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Formats as a comma-separated list of notations, e.g. `E3, E4`.
impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(", "))
    }
}

/// Iterator over the squares of a [`SquareSet`].
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.len();
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn insert_and_contains() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        assert!(set.insert(sq("E4")));
        assert!(!set.insert(sq("E4")));
        assert!(set.contains(sq("E4")));
        assert!(!set.contains(sq("E5")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove() {
        let mut set: SquareSet = [Square::A1, Square::H8].into_iter().collect();
        assert!(set.remove(Square::A1));
        assert!(!set.remove(Square::A1));
        assert_eq!(set, SquareSet::from_square(Square::H8));
    }

    #[test]
    fn iterates_in_ascending_order() {
        let set: SquareSet = [sq("H8"), sq("A2"), sq("C1"), sq("A1")]
            .into_iter()
            .collect();
        let squares: Vec<_> = set.iter().collect();
        assert_eq!(squares, vec![sq("A1"), sq("C1"), sq("A2"), sq("H8")]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn union_and_intersection() {
        let a: SquareSet = [sq("A1"), sq("B2")].into_iter().collect();
        let b: SquareSet = [sq("B2"), sq("C3")].into_iter().collect();
        assert_eq!((a | b).len(), 3);
        assert_eq!(a & b, SquareSet::from_square(sq("B2")));
        assert_eq!(SquareSet::FULL.len(), 64);
    }

    #[test]
    fn display_joins_notations() {
        let set: SquareSet = [sq("E4"), sq("E3")].into_iter().collect();
        assert_eq!(set.to_string(), "E3, E4");
        assert_eq!(set.join(","), "E3,E4");
        assert_eq!(SquareSet::EMPTY.to_string(), "");
        assert_eq!(format!("{:?}", set), "{Square(E3), Square(E4)}");
    }
}
