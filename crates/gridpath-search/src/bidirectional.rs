use std::time::Duration;

use gridpath_core::{Cell, Grid};

use crate::result::SearchResult;
use crate::traits::Search;

/// Placeholder for a bidirectional search.
///
/// Not implemented: every call reports no path, zero cost, zero expansions
/// and zero elapsed time. It is not part of [`Algorithm`](crate::Algorithm).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bidirectional;

impl Search for Bidirectional {
    fn name(&self) -> &'static str {
        "Bidirectional"
    }

    fn search(&self, _grid: &Grid, _start: Cell, _goal: Cell, trace: bool) -> SearchResult {
        SearchResult {
            path: None,
            cost: 0,
            expanded: 0,
            elapsed: Duration::ZERO,
            expansion_order: trace.then(Vec::new),
        }
    }
}
