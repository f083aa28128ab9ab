//! The [`Cell`] coordinate type.
//!
//! Cells are addressed as `(row, col)`: row grows downward, column grows
//! to the right. Equality, hashing and ordering are all structural so cells
//! can key maps and live in sets.

use std::fmt;
use std::ops::{Add, Sub};

/// A grid coordinate `(row, col)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four axis-aligned neighbours in search order: up, down, left, right.
    ///
    /// Every algorithm breaks ties through this order, so it must not change.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` is exactly one unit step away along an axis.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let c = Cell::new(3, 4);
        assert_eq!(
            c.neighbors_4(),
            [
                Cell::new(2, 4),
                Cell::new(4, 4),
                Cell::new(3, 3),
                Cell::new(3, 5),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn structural_hash() {
        let mut set = HashSet::new();
        set.insert(Cell::new(2, 3));
        assert!(set.contains(&Cell::from((2, 3))));
        assert!(!set.contains(&Cell::new(3, 2)));
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(1, 1);
        assert!(c.is_adjacent(Cell::new(0, 1)));
        assert!(c.is_adjacent(Cell::new(1, 2)));
        assert!(!c.is_adjacent(Cell::new(2, 2)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn display_and_arithmetic() {
        let a = Cell::new(1, 2);
        let b = Cell::new(3, 5);
        assert_eq!(a.to_string(), "(1, 2)");
        assert_eq!(a + b, Cell::new(4, 7));
        assert_eq!(b - a, Cell::new(2, 3));
    }
}
