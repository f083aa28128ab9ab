use std::collections::HashMap;
use std::time::{Duration, Instant};

use gridpath_core::{Cell, Grid};

/// The outcome of one search call.
///
/// An unreachable goal is not an error: it is reported as `path == None`
/// with `cost == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Start-to-goal path, both endpoints included.
    pub path: Option<Vec<Cell>>,
    /// Number of unit steps on the path, `0` when no path was found.
    pub cost: usize,
    /// Number of cells popped from the frontier and accepted.
    pub expanded: usize,
    /// Wall-clock time spent inside the call.
    pub elapsed: Duration,
    /// Accepted cells in expansion order, present only for traced runs.
    pub expansion_order: Option<Vec<Cell>>,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Per-call instrumentation shared by every algorithm: the clock, the
/// expansion counter and the optional trace.
pub(crate) struct Probe {
    name: &'static str,
    started: Instant,
    expanded: usize,
    order: Option<Vec<Cell>>,
}

impl Probe {
    pub(crate) fn start(name: &'static str, trace: bool) -> Self {
        Self {
            name,
            started: Instant::now(),
            expanded: 0,
            order: trace.then(Vec::new),
        }
    }

    /// Record that `cell` was popped and accepted.
    #[inline]
    pub(crate) fn expand(&mut self, cell: Cell) {
        self.expanded += 1;
        if let Some(order) = &mut self.order {
            order.push(cell);
        }
    }

    /// Finish with a path; cost is derived from its length.
    pub(crate) fn found(self, path: Vec<Cell>) -> SearchResult {
        let cost = path.len().saturating_sub(1);
        self.finish(Some(path), cost)
    }

    /// Finish without a path.
    pub(crate) fn unreachable(self) -> SearchResult {
        self.finish(None, 0)
    }

    fn finish(self, path: Option<Vec<Cell>>, cost: usize) -> SearchResult {
        let elapsed = self.started.elapsed();
        log::debug!(
            "{}: found={} cost={} expanded={} elapsed={:?}",
            self.name,
            path.is_some(),
            cost,
            self.expanded,
            elapsed
        );
        SearchResult {
            path,
            cost,
            expanded: self.expanded,
            elapsed,
            expansion_order: self.order,
        }
    }
}

/// Whether both endpoints are traversable. A walled or out-of-bounds start
/// or goal makes the search report the unreachable outcome without
/// expanding anything.
pub(crate) fn endpoints_valid(name: &str, grid: &Grid, start: Cell, goal: Cell) -> bool {
    let ok = grid.is_valid(start) && grid.is_valid(goal);
    if !ok {
        log::warn!("{name}: start {start} or goal {goal} is walled or out of bounds");
    }
    ok
}

/// Walk a predecessor map back from `goal` (the start has no predecessor)
/// and return the path in start-to-goal order.
pub(crate) fn reconstruct(parent: &HashMap<Cell, Option<Cell>>, goal: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut node = Some(goal);
    while let Some(cell) = node {
        path.push(cell);
        node = parent.get(&cell).copied().flatten();
    }
    path.reverse();
    path
}
