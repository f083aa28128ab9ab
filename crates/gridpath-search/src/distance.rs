use std::fmt;
use std::str::FromStr;

use gridpath_core::Cell;

/// A heuristic as a plain function pointer: estimated cost from `from` to `to`.
pub type HeuristicFn = fn(Cell, Cell) -> f64;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Euclidean (L2) distance between two cells. Not squared.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    dr.hypot(dc)
}

fn manhattan_f64(a: Cell, b: Cell) -> f64 {
    f64::from(manhattan(a, b))
}

/// The built-in heuristics selectable for Greedy Best-First search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    #[default]
    Manhattan,
    Euclidean,
}

impl Distance {
    pub const ALL: [Distance; 2] = [Distance::Manhattan, Distance::Euclidean];

    /// The heuristic function for this distance.
    pub fn heuristic(self) -> HeuristicFn {
        match self {
            Self::Manhattan => manhattan_f64,
            Self::Euclidean => euclidean,
        }
    }

    /// Evaluate the distance between two cells.
    #[inline]
    pub fn estimate(self, from: Cell, to: Cell) -> f64 {
        (self.heuristic())(from, to)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "Manhattan",
            Self::Euclidean => "Euclidean",
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distance {
    type Err = ParseDistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" | "l1" => Ok(Self::Manhattan),
            "euclidean" | "l2" => Ok(Self::Euclidean),
            _ => Err(ParseDistanceError(s.to_string())),
        }
    }
}

/// Returned when a heuristic name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDistanceError(pub String);

impl fmt::Display for ParseDistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic \u{201c}{}\u{201d} (expected manhattan or euclidean)",
            self.0
        )
    }
}

impl std::error::Error for ParseDistanceError {}
