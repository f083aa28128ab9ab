use gridpath_core::{Cell, Grid};

use crate::result::SearchResult;

/// A single-query grid search strategy.
///
/// Implementations read the grid only through [`Grid::is_valid`] and
/// [`Grid::neighbors`], own all their working state for the duration of
/// the call, and never fail: an unreachable goal is an ordinary
/// [`SearchResult`] without a path.
pub trait Search {
    /// Human-readable algorithm name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Search from `start` to `goal`. When `trace` is set the result carries
    /// the expansion order.
    ///
    /// When `start == goal` the path is `[start]` with cost 0. A*, Dijkstra,
    /// BFS and DFS pop the start first and report one expansion; Greedy
    /// returns before searching and reports none.
    fn search(&self, grid: &Grid, start: Cell, goal: Cell, trace: bool) -> SearchResult;

    /// Search between the grid's own start and goal, without a trace.
    fn run(&self, grid: &Grid) -> SearchResult {
        self.search(grid, grid.start(), grid.goal(), false)
    }

    /// Search between the grid's own start and goal, recording the trace.
    fn run_traced(&self, grid: &Grid) -> SearchResult {
        self.search(grid, grid.start(), grid.goal(), true)
    }
}
