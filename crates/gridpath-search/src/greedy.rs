use std::collections::{HashMap, HashSet};

use gridpath_core::{Cell, Grid};

use crate::distance::{Distance, HeuristicFn};
use crate::frontier::{Frontier, Score};
use crate::result::{Probe, SearchResult, endpoints_valid, reconstruct};
use crate::traits::Search;

/// Greedy Best-First search: always expand the cell that looks closest to
/// the goal, ignoring the cost already paid.
///
/// The predecessor of a cell is fixed the first time the cell is discovered
/// and never updated, so the returned path can be far from optimal. Maps
/// built to exploit this (see the Greedy Trap) show the difference from A*.
///
/// When `start == goal` the search returns the single-cell path before
/// touching the frontier, so it reports zero expansions and an empty trace.
///
/// The heuristic is any `Fn(Cell, Cell) -> f64`; [`Greedy::new`] uses
/// Manhattan distance and [`Greedy::with_distance`] selects a built-in.
#[derive(Debug, Clone, Copy)]
pub struct Greedy<H = HeuristicFn> {
    heuristic: H,
}

impl Greedy {
    /// Greedy search with the Manhattan heuristic.
    pub fn new() -> Self {
        Self::with_distance(Distance::Manhattan)
    }

    /// Greedy search with one of the built-in heuristics.
    pub fn with_distance(distance: Distance) -> Self {
        Self {
            heuristic: distance.heuristic(),
        }
    }
}

impl Default for Greedy {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Fn(Cell, Cell) -> f64> Greedy<H> {
    /// Greedy search with a custom heuristic.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<H: Fn(Cell, Cell) -> f64> Search for Greedy<H> {
    fn name(&self) -> &'static str {
        "Greedy Best-First"
    }

    fn search(&self, grid: &Grid, start: Cell, goal: Cell, trace: bool) -> SearchResult {
        let mut probe = Probe::start(self.name(), trace);
        if !endpoints_valid(self.name(), grid, start, goal) {
            return probe.unreachable();
        }
        if start == goal {
            return probe.found(vec![start]);
        }

        let h = &self.heuristic;
        let mut open: Frontier<Score, Cell> = Frontier::new();
        open.push(Score(h(start, goal)), start);

        let mut came_from: HashMap<Cell, Option<Cell>> = HashMap::from([(start, None)]);
        let mut visited: HashSet<Cell> = HashSet::new();
        let mut nbuf = Vec::with_capacity(4);

        while let Some((_, current)) = open.pop() {
            if !visited.insert(current) {
                continue;
            }
            probe.expand(current);

            if current == goal {
                return probe.found(reconstruct(&came_from, goal));
            }

            nbuf.clear();
            grid.neighbors_into(current, &mut nbuf);

            for &next in nbuf.iter() {
                if visited.contains(&next) {
                    continue;
                }
                // First discovery wins.
                came_from.entry(next).or_insert(Some(current));
                open.push(Score(h(next, goal)), next);
            }
        }

        probe.unreachable()
    }
}
