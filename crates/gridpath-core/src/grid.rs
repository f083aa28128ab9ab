//! The obstacle grid searched by every algorithm.
//!
//! A [`Grid`] is a fixed `rows × cols` rectangle with a set of walled cells
//! and designated start/goal cells. Searches only ever read it through
//! [`Grid::is_valid`] and [`Grid::neighbors`].

use std::collections::BTreeSet;
use std::fmt;

use crate::cell::Cell;

/// A static 2D obstacle grid.
///
/// With the `serde` feature a grid (de)serializes as
/// `{rows, cols, start: [r, c], goal: [r, c], walls: [[r, c], ...]}`, and
/// deserializing goes through the same checks as [`Grid::new`] and the
/// setters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridData", into = "GridData")
)]
pub struct Grid {
    rows: i32,
    cols: i32,
    walls: BTreeSet<Cell>,
    start: Cell,
    goal: Cell,
}

impl Grid {
    /// Create an empty grid. Start defaults to the top-left corner and goal
    /// to the bottom-right one.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            walls: BTreeSet::new(),
            start: Cell::new(0, 0),
            goal: Cell::new(rows - 1, cols - 1),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Always false: dimensions are positive by construction.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// The walled cells in row-major order.
    pub fn walls(&self) -> &BTreeSet<Cell> {
        &self.walls
    }

    /// Whether `cell` lies inside the grid rectangle.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// Whether `cell` is inside the grid and not a wall.
    #[inline]
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.is_wall(cell)
    }

    /// Traversable neighbours of `cell`, in up, down, left, right order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_valid(n))
    }

    /// Append the traversable neighbours of `cell` into `buf`.
    ///
    /// The caller clears `buf` before calling.
    pub fn neighbors_into(&self, cell: Cell, buf: &mut Vec<Cell>) {
        buf.extend(self.neighbors(cell));
    }

    /// Mark `cell` as a wall.
    pub fn set_wall(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check(cell)?;
        self.walls.insert(cell);
        Ok(())
    }

    /// Remove the wall at `cell`, if any. Returns whether a wall was removed.
    pub fn clear_wall(&mut self, cell: Cell) -> bool {
        self.walls.remove(&cell)
    }

    pub fn set_start(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check(cell)?;
        self.start = cell;
        Ok(())
    }

    pub fn set_goal(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check(cell)?;
        self.goal = cell;
        Ok(())
    }

    /// Render the grid as text, letting `overlay` replace the character of
    /// any non-endpoint floor cell.
    ///
    /// Start and goal are always drawn as `S` and `G`, walls as `#`.
    pub fn render_with(&self, overlay: impl Fn(Cell) -> Option<char>) -> String {
        let mut out = String::with_capacity(self.len() + self.rows as usize);
        for row in 0..self.rows {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                let ch = if cell == self.start {
                    START
                } else if cell == self.goal {
                    GOAL
                } else if self.is_wall(cell) {
                    WALL
                } else {
                    overlay(cell).unwrap_or(FLOOR)
                };
                out.push(ch);
            }
        }
        out
    }

    fn check(&self, cell: Cell) -> Result<(), GridError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

pub(crate) const FLOOR: char = '.';
pub(crate) const WALL: char = '#';
pub(crate) const START: char = 'S';
pub(crate) const GOAL: char = 'G';

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| None))
    }
}

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows and columns must both be positive.
    InvalidDimensions { rows: i32, cols: i32 },
    /// The cell lies outside the grid rectangle.
    OutOfBounds { cell: Cell, rows: i32, cols: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid: invalid dimensions {rows}x{cols}")
            }
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "grid: cell {cell} is outside the {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: i32, cols: i32) -> Grid {
        Grid::new(rows, cols).unwrap()
    }

    #[test]
    fn defaults_to_corners() {
        let g = grid(4, 6);
        assert_eq!(g.start(), Cell::new(0, 0));
        assert_eq!(g.goal(), Cell::new(3, 5));
        assert_eq!(g.len(), 24);
        assert!(g.walls().is_empty());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(GridError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(Grid::new(3, -1).is_err());
    }

    #[test]
    fn validity_checks_bounds_and_walls() {
        let mut g = grid(3, 3);
        g.set_wall(Cell::new(1, 1)).unwrap();
        assert!(g.is_valid(Cell::new(0, 0)));
        assert!(g.is_valid(Cell::new(2, 2)));
        assert!(!g.is_valid(Cell::new(1, 1)));
        assert!(!g.is_valid(Cell::new(-1, 0)));
        assert!(!g.is_valid(Cell::new(0, 3)));
        assert!(!g.is_valid(Cell::new(3, 0)));
    }

    #[test]
    fn interior_neighbors_in_fixed_order() {
        let g = grid(5, 5);
        let n: Vec<_> = g.neighbors(Cell::new(2, 2)).collect();
        assert_eq!(
            n,
            vec![
                Cell::new(1, 2),
                Cell::new(3, 2),
                Cell::new(2, 1),
                Cell::new(2, 3),
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let mut g = grid(3, 3);
        g.set_wall(Cell::new(1, 0)).unwrap();
        let n: Vec<_> = g.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(n, vec![Cell::new(0, 1)]);

        let mut buf = Vec::new();
        g.neighbors_into(Cell::new(2, 2), &mut buf);
        assert_eq!(buf, vec![Cell::new(1, 2), Cell::new(2, 1)]);
    }

    #[test]
    fn mutators_reject_out_of_bounds() {
        let mut g = grid(2, 2);
        let err = g.set_wall(Cell::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                cell: Cell::new(2, 0),
                rows: 2,
                cols: 2
            }
        );
        assert!(g.set_start(Cell::new(0, -1)).is_err());
        assert!(g.set_goal(Cell::new(5, 5)).is_err());
        assert_eq!(g.start(), Cell::new(0, 0));
        assert_eq!(g.goal(), Cell::new(1, 1));
    }

    #[test]
    fn clear_wall() {
        let mut g = grid(2, 2);
        g.set_wall(Cell::new(0, 1)).unwrap();
        assert!(g.clear_wall(Cell::new(0, 1)));
        assert!(!g.clear_wall(Cell::new(0, 1)));
        assert!(g.is_valid(Cell::new(0, 1)));
    }

    #[test]
    fn display_and_overlay() {
        let mut g = grid(3, 3);
        g.set_wall(Cell::new(1, 0)).unwrap();
        g.set_wall(Cell::new(1, 1)).unwrap();
        g.set_goal(Cell::new(2, 2)).unwrap();
        assert_eq!(g.to_string(), "S..\n##.\n..G");

        let drawn = g.render_with(|c| (c.row == 0 || c == Cell::new(1, 1)).then_some('*'));
        assert_eq!(drawn, "S**\n##.\n..G");
    }

    #[test]
    fn error_messages() {
        let err = GridError::OutOfBounds {
            cell: Cell::new(4, 1),
            rows: 3,
            cols: 3,
        };
        assert_eq!(err.to_string(), "grid: cell (4, 1) is outside the 3x3 grid");
    }
}

/// Serialized form of a [`Grid`]: plain data, validated on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridData {
    rows: i32,
    cols: i32,
    start: (i32, i32),
    goal: (i32, i32),
    #[serde(default)]
    walls: Vec<(i32, i32)>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, GridError> {
        let mut grid = Grid::new(data.rows, data.cols)?;
        for wall in data.walls {
            grid.set_wall(wall.into())?;
        }
        grid.set_start(data.start.into())?;
        grid.set_goal(data.goal.into())?;
        Ok(grid)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridData {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            start: grid.start.into(),
            goal: grid.goal.into(),
            walls: grid.walls.into_iter().map(Into::into).collect(),
        }
    }
}
