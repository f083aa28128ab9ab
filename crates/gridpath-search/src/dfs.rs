use std::collections::HashSet;

use gridpath_core::{Cell, Grid};

use crate::result::{Probe, SearchResult, endpoints_valid};
use crate::traits::Search;

/// Depth-first search over a LIFO stack of partial paths.
///
/// Neighbours are pushed in reverse so that the stack pops them in the
/// usual up, down, left, right order. No optimality guarantee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dfs;

impl Search for Dfs {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, grid: &Grid, start: Cell, goal: Cell, trace: bool) -> SearchResult {
        let mut probe = Probe::start(self.name(), trace);
        if !endpoints_valid(self.name(), grid, start, goal) {
            return probe.unreachable();
        }

        let mut stack: Vec<Vec<Cell>> = vec![vec![start]];
        let mut visited: HashSet<Cell> = HashSet::new();
        let mut nbuf = Vec::with_capacity(4);

        while let Some(path) = stack.pop() {
            let Some(&node) = path.last() else {
                continue;
            };
            if !visited.insert(node) {
                continue;
            }
            probe.expand(node);

            if node == goal {
                return probe.found(path);
            }

            nbuf.clear();
            grid.neighbors_into(node, &mut nbuf);

            for &next in nbuf.iter().rev() {
                if visited.contains(&next) {
                    continue;
                }
                let mut next_path = path.clone();
                next_path.push(next);
                stack.push(next_path);
            }
        }

        probe.unreachable()
    }
}
