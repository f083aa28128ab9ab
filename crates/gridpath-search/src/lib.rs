//! Classical single-query search algorithms on a 2D obstacle grid.
//!
//! Five strategies share one contract, [`Search`], so their results can be
//! compared side by side:
//!
//! | Algorithm | Frontier | Optimal |
//! |---|---|---|
//! | [`AStar`] | min-heap on `g + h` (Manhattan), entries carry paths | yes |
//! | [`Dijkstra`] | min-heap on `g`, `dist`/`parent` maps | yes |
//! | [`Greedy`] | min-heap on `h` only, injectable heuristic | no |
//! | [`Bfs`] | FIFO queue of paths | yes |
//! | [`Dfs`] | LIFO stack of paths | no |
//!
//! Every search counts a cell as *expanded* the first time it is popped and
//! accepted, tests for the goal at that moment, breaks priority ties in
//! insertion order and explores neighbours up, down, left, right. Running the
//! same search twice on the same grid yields the same path, cost, expansion
//! count and trace.
//!
//! [`Algorithm`] is the closed set of the five, dispatching through
//! [`Search`]. [`Bidirectional`] is a declared but unimplemented placeholder.
//!
//! When the start or goal is walled or out of bounds, every search returns
//! the unreachable outcome without expanding anything.

mod algorithm;
mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod greedy;
mod result;
mod traits;

#[cfg(test)]
mod testutil;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::AStar;
pub use bfs::Bfs;
pub use bidirectional::Bidirectional;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use distance::{Distance, HeuristicFn, ParseDistanceError, euclidean, manhattan};
pub use greedy::Greedy;
pub use result::SearchResult;
pub use traits::Search;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::layout;
    use gridpath_core::Cell;

    #[test]
    fn walled_endpoints_are_unreachable_for_every_algorithm() {
        let mut g = layout("S...\n....\n...G");
        g.set_wall(Cell::new(2, 3)).unwrap();
        for a in Algorithm::ALL {
            let res = a.run_traced(&g);
            assert_eq!(res.path, None, "{a}");
            assert_eq!(res.cost, 0, "{a}");
            assert_eq!(res.expanded, 0, "{a}");
            assert_eq!(res.expansion_order, Some(vec![]), "{a}");
        }
        // Same when the goal is walled and equals the start.
        let s = g.goal();
        for a in Algorithm::ALL {
            assert_eq!(a.search(&g, s, s, false).path, None, "{a}");
        }
    }

    #[test]
    fn out_of_bounds_endpoints_are_unreachable() {
        let g = layout("S..\n..G");
        for a in Algorithm::ALL {
            let res = a.search(&g, Cell::new(5, 5), g.goal(), false);
            assert!(!res.found(), "{a}");
            assert_eq!(res.expanded, 0, "{a}");
        }
    }

    #[test]
    fn trivial_case_expansion_counts() {
        let g = layout("S..\n..G");
        let s = g.start();
        for a in Algorithm::ALL {
            let res = a.search(&g, s, s, true);
            assert_eq!(res.path, Some(vec![s]), "{a}");
            assert_eq!(res.cost, 0, "{a}");
            let expected = if a == Algorithm::Greedy { vec![] } else { vec![s] };
            assert_eq!(res.expanded, expected.len(), "{a}");
            assert_eq!(res.expansion_order, Some(expected), "{a}");
        }
    }

    #[test]
    fn untraced_runs_have_no_order() {
        let g = layout("S..\n##.\n..G");
        for a in Algorithm::ALL {
            assert_eq!(a.run(&g).expansion_order, None, "{a}");
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::testutil::layout;

    #[test]
    fn result_round_trip() {
        let g = layout("S..\n##.\n..G");
        let res = AStar.run_traced(&g);
        let json = serde_json::to_string(&res).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(res, back);
    }

    #[test]
    fn algorithm_round_trip() {
        for a in Algorithm::ALL {
            let json = serde_json::to_string(&a).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(a, back);
        }
    }
}
