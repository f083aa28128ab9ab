//! The built-in teaching maps.
//!
//! Each map is stored as a text layout (see [`gridpath_core::layout`]). The
//! trap maps are built so that a specific algorithm does visibly worse than
//! A* on them: Greedy Best-First on [`MapId::GreedyTrap`], DFS on
//! [`MapId::DfsDeepTrap`].

use std::fmt;
use std::str::FromStr;

use gridpath_core::Grid;

const SIMPLE: &str = "\
S....
.....
.....
.....
....G";

const MAZE: &str = "\
S.........
.#######..
..........
.#.#.#.#.#
..........
.###.####.
..........
...#.#.#.#
..........
.........G";

const NO_PATH: &str = "\
S....
.....
.....
...##
...#G";

const COMPARISON: &str = "\
S.......
######..
........
..######
........
######..
........
.......G";

const SIMPLE_3X3: &str = "\
S..
##.
..G";

const MAZE_5X5: &str = "\
S#...
.#.#.
...#.
##...
...#G";

const GREEDY_COMPARISON: &str = "\
S....
####.
...#.
.#.#.
.#.#G";

// The pocket at the bottom-left lures Greedy away from the top corridor.
const GREEDY_TRAP: &str = "\
S......
.#.#...
.#.#...
.#.#...
.#.###.
.....#.
.....#G";

const DFS_DEEP_TRAP: &str = "\
S#......
.#.#.#..
.#.#.#..
.#.#.#..
.#...#..
.#####..
........
.......G";

const BRIDGE: &str = "\
.......
...#...
...#...
S..#..G
...#...
...#...
...#...";

/// Identifier of a built-in map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapId {
    Simple,
    Maze,
    NoPath,
    Comparison,
    Simple3x3,
    Maze5x5,
    GreedyComparison,
    GreedyTrap,
    DfsDeepTrap,
    Bridge,
}

impl MapId {
    /// All maps, in menu order (menu key = index + 1).
    pub const ALL: [MapId; 10] = [
        MapId::Simple,
        MapId::Maze,
        MapId::NoPath,
        MapId::Comparison,
        MapId::Simple3x3,
        MapId::Maze5x5,
        MapId::GreedyComparison,
        MapId::GreedyTrap,
        MapId::DfsDeepTrap,
        MapId::Bridge,
    ];

    /// 1-based menu key.
    pub fn key(self) -> usize {
        Self::ALL.iter().position(|&m| m == self).map_or(0, |i| i + 1)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Maze => "maze",
            Self::NoPath => "no-path",
            Self::Comparison => "comparison",
            Self::Simple3x3 => "simple-3x3",
            Self::Maze5x5 => "maze-5x5",
            Self::GreedyComparison => "greedy-comparison",
            Self::GreedyTrap => "greedy-trap",
            Self::DfsDeepTrap => "dfs-trap",
            Self::Bridge => "bridge",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "Simple 5x5 (no obstacles)",
            Self::Maze => "Maze 10x10",
            Self::NoPath => "No Path 5x5 (goal blocked)",
            Self::Comparison => "Comparison 8x8 (BFS vs DFS)",
            Self::Simple3x3 => "Simple 3x3",
            Self::Maze5x5 => "Maze 5x5",
            Self::GreedyComparison => "Comparison 5x5 (A* vs Greedy)",
            Self::GreedyTrap => "Greedy Trap 7x7 (A* vs Greedy)",
            Self::DfsDeepTrap => "DFS Deep Trap 8x8 (BFS vs DFS)",
            Self::Bridge => "Bridge 7x7 (optimal path)",
        }
    }

    /// The map as a text layout.
    pub fn layout(self) -> &'static str {
        match self {
            Self::Simple => SIMPLE,
            Self::Maze => MAZE,
            Self::NoPath => NO_PATH,
            Self::Comparison => COMPARISON,
            Self::Simple3x3 => SIMPLE_3X3,
            Self::Maze5x5 => MAZE_5X5,
            Self::GreedyComparison => GREEDY_COMPARISON,
            Self::GreedyTrap => GREEDY_TRAP,
            Self::DfsDeepTrap => DFS_DEEP_TRAP,
            Self::Bridge => BRIDGE,
        }
    }

    /// Build a fresh grid for this map.
    pub fn build(self) -> Grid {
        self.layout()
            .parse()
            .expect("built-in layouts are well-formed")
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapId {
    type Err = ParseMapError;

    /// Accepts the slug or the 1-based menu key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Ok(n) = key.parse::<usize>() {
            if let Some(&m) = n.checked_sub(1).and_then(|i| Self::ALL.get(i)) {
                return Ok(m);
            }
        }
        Self::ALL
            .into_iter()
            .find(|m| m.slug() == key)
            .ok_or_else(|| ParseMapError(s.to_string()))
    }
}

/// Returned when a map name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMapError(pub String);

impl fmt::Display for ParseMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown map \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseMapError {}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Cell;

    #[test]
    fn every_layout_builds() {
        for m in MapId::ALL {
            let g = m.build();
            assert!(g.is_valid(g.start()), "{m}");
            assert!(g.is_valid(g.goal()), "{m}");
            assert_eq!(g.to_string(), m.layout(), "{m}");
        }
    }

    #[test]
    fn dimensions_and_endpoints() {
        let g = MapId::Maze.build();
        assert_eq!((g.rows(), g.cols()), (10, 10));
        assert_eq!(g.walls().len(), 23);
        let g = MapId::Bridge.build();
        assert_eq!(g.start(), Cell::new(3, 0));
        assert_eq!(g.goal(), Cell::new(3, 6));
        assert_eq!(g.walls().len(), 6);
        let g = MapId::NoPath.build();
        let walls: Vec<_> = g.walls().iter().copied().collect();
        assert_eq!(walls, vec![Cell::new(3, 3), Cell::new(3, 4), Cell::new(4, 3)]);
    }

    #[test]
    fn keys_and_slugs_parse() {
        for (i, m) in MapId::ALL.into_iter().enumerate() {
            assert_eq!(m.key(), i + 1);
            assert_eq!(m.slug().parse(), Ok(m));
            assert_eq!((i + 1).to_string().parse(), Ok(m));
        }
        assert!("0".parse::<MapId>().is_err());
        assert!("11".parse::<MapId>().is_err());
        assert_eq!(
            "labyrinth".parse::<MapId>(),
            Err(ParseMapError("labyrinth".into()))
        );
    }
}
