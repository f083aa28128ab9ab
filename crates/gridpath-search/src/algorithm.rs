use std::fmt;
use std::str::FromStr;

use gridpath_core::{Cell, Grid};

use crate::distance::Distance;
use crate::result::SearchResult;
use crate::traits::Search;
use crate::{AStar, Bfs, Dfs, Dijkstra, Greedy};

/// The closed set of selectable algorithms.
///
/// `Algorithm` implements [`Search`] by dispatching to the matching unit
/// struct. Greedy uses Manhattan distance unless a heuristic is given via
/// [`Algorithm::search_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    Dijkstra,
    Greedy,
    Bfs,
    Dfs,
}

impl Algorithm {
    /// All algorithms, in menu/report order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::Greedy,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Short lowercase identifier, accepted by `FromStr`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
            Self::Greedy => "greedy",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Whether the algorithm takes a heuristic choice.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Self::Greedy)
    }

    /// Run with an explicit heuristic. Only Greedy consults it; A* always
    /// uses Manhattan distance.
    pub fn search_with(
        self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
        trace: bool,
        heuristic: Distance,
    ) -> SearchResult {
        match self {
            Self::AStar => AStar.search(grid, start, goal, trace),
            Self::Dijkstra => Dijkstra.search(grid, start, goal, trace),
            Self::Greedy => Greedy::with_distance(heuristic).search(grid, start, goal, trace),
            Self::Bfs => Bfs.search(grid, start, goal, trace),
            Self::Dfs => Dfs.search(grid, start, goal, trace),
        }
    }
}

impl Search for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Self::AStar => AStar.name(),
            Self::Dijkstra => Dijkstra.name(),
            Self::Greedy => Greedy::new().name(),
            Self::Bfs => Bfs.name(),
            Self::Dfs => Dfs.name(),
        }
    }

    fn search(&self, grid: &Grid, start: Cell, goal: Cell, trace: bool) -> SearchResult {
        self.search_with(grid, start, goal, trace, Distance::default())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the slug, the display name, or the 1-based menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let found = match key.as_str() {
            "a*" | "a-star" | "1" => Some(Self::AStar),
            "2" => Some(Self::Dijkstra),
            "greedy best-first" | "gbfs" | "3" => Some(Self::Greedy),
            "4" => Some(Self::Bfs),
            "5" => Some(Self::Dfs),
            _ => Self::ALL.into_iter().find(|a| a.slug() == key),
        };
        found.ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::layout;

    #[test]
    fn parse_names() {
        for a in Algorithm::ALL {
            assert_eq!(a.slug().parse(), Ok(a));
            assert_eq!(a.name().parse(), Ok(a));
        }
        assert_eq!("A*".parse(), Ok(Algorithm::AStar));
        assert_eq!(" 4 ".parse(), Ok(Algorithm::Bfs));
        assert_eq!(
            "bidirectional".parse::<Algorithm>(),
            Err(ParseAlgorithmError("bidirectional".into()))
        );
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let g = layout("S#...\n.#.#.\n...#.\n##...\n...#G");
        assert_eq!(Algorithm::AStar.run(&g).path, AStar.run(&g).path);
        assert_eq!(Algorithm::Dijkstra.run(&g).expanded, Dijkstra.run(&g).expanded);
        assert_eq!(Algorithm::Greedy.run(&g).path, Greedy::new().run(&g).path);
        assert_eq!(Algorithm::Bfs.run(&g).path, Bfs.run(&g).path);
        assert_eq!(Algorithm::Dfs.run(&g).path, Dfs.run(&g).path);
    }

    #[test]
    fn heuristic_only_affects_greedy() {
        let g = layout("S#...\n.#.#.\n...#.\n##...\n...#G");
        let (s, t) = (g.start(), g.goal());
        let m = Algorithm::Greedy.search_with(&g, s, t, false, Distance::Manhattan);
        let e = Algorithm::Greedy.search_with(&g, s, t, false, Distance::Euclidean);
        assert_eq!(m.expanded, 10);
        assert_eq!(e.expanded, 9);
        let a = Algorithm::AStar.search_with(&g, s, t, false, Distance::Euclidean);
        assert_eq!(a.path, AStar.run(&g).path);
        assert!(Algorithm::Greedy.uses_heuristic());
        assert!(!Algorithm::Bfs.uses_heuristic());
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = Algorithm::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(
            names,
            ["A*", "Dijkstra", "Greedy Best-First", "BFS", "DFS"]
        );
    }
}
