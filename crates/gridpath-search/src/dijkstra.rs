use std::collections::{HashMap, HashSet};

use gridpath_core::{Cell, Grid};

use crate::frontier::Frontier;
use crate::result::{Probe, SearchResult, endpoints_valid, reconstruct};
use crate::traits::Search;

/// Dijkstra's algorithm: uniform-cost search keyed by distance alone.
///
/// Unlike [`AStar`](crate::AStar), entries carry only a cell; the best known
/// distance and predecessor of each cell live in `dist`/`parent` maps and the
/// path is rebuilt from `parent` once the goal is accepted. On a unit-cost
/// grid it finds the same cost as A* but, lacking a heuristic, usually
/// expands more cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl Search for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, grid: &Grid, start: Cell, goal: Cell, trace: bool) -> SearchResult {
        let mut probe = Probe::start(self.name(), trace);
        if !endpoints_valid(self.name(), grid, start, goal) {
            return probe.unreachable();
        }

        let mut open: Frontier<usize, Cell> = Frontier::new();
        open.push(0, start);

        let mut dist: HashMap<Cell, usize> = HashMap::from([(start, 0)]);
        let mut parent: HashMap<Cell, Option<Cell>> = HashMap::from([(start, None)]);
        let mut visited: HashSet<Cell> = HashSet::new();
        let mut nbuf = Vec::with_capacity(4);

        while let Some((current_dist, current)) = open.pop() {
            if !visited.insert(current) {
                continue;
            }
            probe.expand(current);

            if current == goal {
                return probe.found(reconstruct(&parent, goal));
            }

            nbuf.clear();
            grid.neighbors_into(current, &mut nbuf);

            for &next in nbuf.iter() {
                if visited.contains(&next) {
                    continue;
                }
                let tentative = current_dist + 1;
                if dist.get(&next).is_some_and(|&d| tentative >= d) {
                    continue;
                }
                dist.insert(next, tentative);
                parent.insert(next, Some(current));
                open.push(tentative, next);
            }
        }

        probe.unreachable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AStar;
    use crate::testutil::{assert_valid_path, layout};

    #[test]
    fn three_by_three_example() {
        let g = layout("S..\n##.\n..G");
        let res = Dijkstra.run(&g);
        assert_eq!(
            res.path,
            Some(vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2),
            ])
        );
        assert_eq!(res.cost, 4);
        assert_eq!(res.expanded, 5);
    }

    #[test]
    fn matches_astar_cost_but_expands_more() {
        let g = layout(
            "\
S#...
.#.#.
...#.
##...
...#G",
        );
        let d = Dijkstra.run(&g);
        let a = AStar.run(&g);
        assert_valid_path(&g, &d);
        assert_eq!(d.cost, 8);
        assert_eq!(d.cost, a.cost);
        assert!(d.expanded > a.expanded);
    }

    #[test]
    fn goes_around_a_wall() {
        let g = layout(
            "\
...#...
...#...
...#...
S..#..G
...#...
...#...
.......",
        );
        let res = Dijkstra.run_traced(&g);
        assert_valid_path(&g, &res);
        assert_eq!(res.cost, 12);
        assert_eq!(res.expansion_order.map(|o| o.len()), Some(res.expanded));
    }

    #[test]
    fn unreachable_goal() {
        let g = layout("S.#.\n..#G");
        let res = Dijkstra.run(&g);
        assert_eq!(res.path, None);
        assert_eq!(res.cost, 0);
        assert_eq!(res.expanded, 4);
    }

    #[test]
    fn start_equals_goal_expands_once() {
        let g = layout("S.\n.G");
        let res = Dijkstra.search(&g, g.start(), g.start(), false);
        assert_eq!(res.path, Some(vec![g.start()]));
        assert_eq!(res.cost, 0);
        assert_eq!(res.expanded, 1);
    }
}
