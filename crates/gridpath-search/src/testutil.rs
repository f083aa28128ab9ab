//! Shared helpers for the algorithm unit tests.

use gridpath_core::Grid;

use crate::result::SearchResult;

pub(crate) fn layout(s: &str) -> Grid {
    s.parse().expect("test layout")
}

/// Assert that a found path is a valid start-to-goal walk over free cells.
pub(crate) fn assert_valid_path(grid: &Grid, res: &SearchResult) {
    let path = res.path.as_ref().expect("path expected");
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.goal()));
    assert_eq!(res.cost, path.len() - 1);
    for cell in path {
        assert!(grid.is_valid(*cell), "{cell} is not traversable");
    }
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} -> {} is not a step", pair[0], pair[1]);
    }
}
