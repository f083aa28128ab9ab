use std::collections::{HashSet, VecDeque};

use gridpath_core::{Cell, Grid};

use crate::result::{Probe, SearchResult, endpoints_valid};
use crate::traits::Search;

/// Breadth-first search over a FIFO queue of partial paths.
///
/// A cell may be queued several times through different partial paths; the
/// first pop marks it visited and later copies are skipped. With unit edge
/// costs the first path popped at the goal has the fewest steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bfs;

impl Search for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &Grid, start: Cell, goal: Cell, trace: bool) -> SearchResult {
        let mut probe = Probe::start(self.name(), trace);
        if !endpoints_valid(self.name(), grid, start, goal) {
            return probe.unreachable();
        }

        let mut queue: VecDeque<Vec<Cell>> = VecDeque::from([vec![start]]);
        let mut visited: HashSet<Cell> = HashSet::new();
        let mut nbuf = Vec::with_capacity(4);

        while let Some(path) = queue.pop_front() {
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

            for &next in nbuf.iter() {
                if visited.contains(&next) {
                    continue;
                }
                let mut next_path = path.clone();
                next_path.push(next);
                queue.push_back(next_path);
            }
        }

        probe.unreachable()
    }
}
