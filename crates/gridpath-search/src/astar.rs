use std::collections::HashSet;

use gridpath_core::{Cell, Grid};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::result::{Probe, SearchResult, endpoints_valid};
use crate::traits::Search;

/// A* search with the Manhattan heuristic.
///
/// The frontier is keyed by `f = g + h` with FIFO tie-breaking. Each entry
/// carries its own copy of the path that reached it, and cells that were
/// already closed are discarded when popped again. Manhattan distance never
/// overestimates on a 4-connected unit-cost grid, so the first path accepted
/// at the goal is a shortest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AStar;

impl Search for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, grid: &Grid, start: Cell, goal: Cell, trace: bool) -> SearchResult {
        let mut probe = Probe::start(self.name(), trace);
        if !endpoints_valid(self.name(), grid, start, goal) {
            return probe.unreachable();
        }

        // (g, path) ride alongside each f-keyed entry.
        let mut open: Frontier<i32, (i32, Vec<Cell>)> = Frontier::new();
        open.push(manhattan(start, goal), (0, vec![start]));

        let mut closed: HashSet<Cell> = HashSet::new();
        let mut nbuf = Vec::with_capacity(4);

        while let Some((_, (g, path))) = open.pop() {
            let Some(&current) = path.last() else {
                continue;
            };

            // Stale duplicate of a closed cell.
            if !closed.insert(current) {
                continue;
            }
            probe.expand(current);

            if current == goal {
                return probe.found(path);
            }

            nbuf.clear();
            grid.neighbors_into(current, &mut nbuf);

            for &next in nbuf.iter() {
                if closed.contains(&next) {
                    continue;
                }
                let next_g = g + 1;
                let mut next_path = Vec::with_capacity(path.len() + 1);
                next_path.extend_from_slice(&path);
                next_path.push(next);
                open.push(next_g + manhattan(next, goal), (next_g, next_path));
            }
        }

        probe.unreachable()
    }
}
