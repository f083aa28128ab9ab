//! Text layouts: build a [`Grid`] from ASCII art.
//!
//! ```text
//! S..
//! ##.
//! ..G
//! ```
//!
//! `.` is floor, `#` is a wall, `S` marks the start and `G` the goal. All
//! lines must have the same width and exactly one `S` and one `G` must be
//! present. Leading and trailing whitespace of the whole string is trimmed,
//! as is trailing whitespace of each line (`\r\n` endings parse cleanly).
//!
//! The format is the same one produced by `Grid`'s `Display` impl.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::grid::{FLOOR, GOAL, Grid, START, WALL};

/// Parse a layout string into a grid.
pub fn parse(s: &str) -> Result<Grid, LayoutError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(LayoutError::Empty);
    }

    let lines: Vec<&str> = s.lines().map(str::trim_end).collect();
    let width = lines[0].chars().count();

    let mut walls = Vec::new();
    let mut start = None;
    let mut goal = None;

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(LayoutError::InconsistentWidth {
                line: row,
                expected: width,
                found,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            let cell = Cell::new(row as i32, col as i32);
            match ch {
                FLOOR => {}
                WALL => walls.push(cell),
                START => {
                    if start.replace(cell).is_some() {
                        return Err(LayoutError::DuplicateStart(cell));
                    }
                }
                GOAL => {
                    if goal.replace(cell).is_some() {
                        return Err(LayoutError::DuplicateGoal(cell));
                    }
                }
                _ => return Err(LayoutError::InvalidChar { ch, cell }),
            }
        }
    }

    let start = start.ok_or(LayoutError::MissingStart)?;
    let goal = goal.ok_or(LayoutError::MissingGoal)?;

    let mut grid = Grid::new(lines.len() as i32, width as i32)?;
    for cell in walls {
        grid.set_wall(cell)?;
    }
    grid.set_start(start)?;
    grid.set_goal(goal)?;
    Ok(grid)
}

impl FromStr for Grid {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no content.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `.#SG` was found.
    InvalidChar { ch: char, cell: Cell },
    MissingStart,
    MissingGoal,
    /// A second `S` was found at the given cell.
    DuplicateStart(Cell),
    /// A second `G` was found at the given cell.
    DuplicateGoal(Cell),
    /// The parsed grid could not be built.
    Grid(crate::grid::GridError),
}

impl From<crate::grid::GridError> for LayoutError {
    fn from(err: crate::grid::GridError) -> Self {
        Self::Grid(err)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, cell } => {
                write!(f, "layout: invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
            Self::MissingStart => write!(f, "layout: no start cell (S)"),
            Self::MissingGoal => write!(f, "layout: no goal cell (G)"),
            Self::DuplicateStart(cell) => write!(f, "layout: second start cell at {cell}"),
            Self::DuplicateGoal(cell) => write!(f, "layout: second goal cell at {cell}"),
            Self::Grid(err) => write!(f, "layout: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}
