//! Seeded random maps that always have a solution.
//!
//! Generation first carves a random monotone corridor of right/down steps
//! from the top-left corner to the bottom-right one, then turns every other
//! cell into a wall with probability `wall_prob`. The corridor guarantees a
//! path of exactly `rows + cols - 2` steps exists, so the shortest path is
//! never longer than that.

use std::collections::HashSet;
use std::fmt;

use gridpath_core::{Cell, Grid, GridError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Settings for [`RandomMapConfig::generate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomMapConfig {
    pub rows: i32,
    pub cols: i32,
    /// Probability that a cell off the corridor becomes a wall, in `[0, 1]`.
    pub wall_prob: f64,
    /// Fixed seed for reproducible maps. `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for RandomMapConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            wall_prob: 0.28,
            seed: None,
        }
    }
}

/// A generated map together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomMap {
    pub grid: Grid,
    pub seed: u64,
}

impl RandomMapConfig {
    /// Generate a map from the configured seed, or from a fresh one.
    pub fn generate(&self) -> Result<RandomMap, RandomMapError> {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = self.generate_with(&mut rng)?;
        log::debug!(
            "random map {}x{}: {} walls, seed {seed}",
            grid.rows(),
            grid.cols(),
            grid.walls().len()
        );
        Ok(RandomMap { grid, seed })
    }

    /// Generate a map drawing from `rng`. The configured seed is ignored.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Grid, RandomMapError> {
        if !(0.0..=1.0).contains(&self.wall_prob) {
            return Err(RandomMapError::InvalidProbability(self.wall_prob));
        }
        let mut grid = Grid::new(self.rows, self.cols)?;

        // true = down, false = right
        let mut moves: Vec<bool> = std::iter::repeat_n(true, (self.rows - 1) as usize)
            .chain(std::iter::repeat_n(false, (self.cols - 1) as usize))
            .collect();
        moves.shuffle(rng);

        let mut pos = grid.start();
        let mut corridor: HashSet<Cell> = HashSet::from([pos]);
        for down in moves {
            pos = if down { pos.shift(1, 0) } else { pos.shift(0, 1) };
            corridor.insert(pos);
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                if corridor.contains(&cell) {
                    continue;
                }
                if rng.random_bool(self.wall_prob) {
                    grid.set_wall(cell)?;
                }
            }
        }
        Ok(grid)
    }
}

/// Errors from random map generation.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomMapError {
    /// `wall_prob` is outside `[0, 1]` (or NaN).
    InvalidProbability(f64),
    /// The configured dimensions are not a valid grid.
    Grid(GridError),
}

impl From<GridError> for RandomMapError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl fmt::Display for RandomMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProbability(p) => {
                write!(f, "random map: wall probability {p} is not in [0, 1]")
            }
            Self::Grid(err) => write!(f, "random map: {err}"),
        }
    }
}

impl std::error::Error for RandomMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::InvalidProbability(_) => None,
        }
    }
}
